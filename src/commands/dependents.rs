//! Dependents command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::DependentsConfig;
use crate::error::DotGraphError;

impl FromCommand for DependentsConfig {
    fn from_command(command: Commands) -> Result<Self, DotGraphError> {
        match command {
            Commands::Dependents {
                node,
                manifest,
                format,
            } => DependentsConfig::builder()
                .with_manifest(manifest.manifest)
                .with_node(node)
                .with_format(format.format)
                .build(),
            _ => Err(DotGraphError::ConfigurationError {
                message: "Invalid command type for DependentsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(DependentsConfig);

/// Execute the dependents command for reverse lookups
pub fn execute_dependents_command(command: Commands) -> Result<()> {
    let config = DependentsConfig::from_command(command)
        .wrap_err("Failed to parse dependents command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::dependents::DependentsExecutor;
    DependentsExecutor::execute(config)
}
