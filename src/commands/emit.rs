//! Emit command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::EmitOptions;
use crate::error::DotGraphError;

impl FromCommand for EmitOptions {
    fn from_command(command: Commands) -> Result<Self, DotGraphError> {
        match command {
            Commands::Emit {
                manifest,
                invert,
                output,
            } => EmitOptions::builder()
                .with_manifest(manifest.manifest)
                .with_invert(invert)
                .with_output(output)
                .build(),
            _ => Err(DotGraphError::ConfigurationError {
                message: "Invalid command type for EmitOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(EmitOptions);

/// Execute the emit command for printing DOT text
pub fn execute_emit_command(command: Commands) -> Result<()> {
    let config =
        EmitOptions::from_command(command).wrap_err("Failed to parse emit command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::emit::EmitExecutor;
    EmitExecutor::execute(config)
}
