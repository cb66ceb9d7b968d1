//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderOptions;
use crate::error::DotGraphError;

impl FromCommand for RenderOptions {
    fn from_command(command: Commands) -> Result<Self, DotGraphError> {
        match command {
            Commands::Render {
                manifest,
                output,
                format,
                renderer,
                invert,
            } => RenderOptions::builder()
                .with_manifest(manifest.manifest)
                .with_output(output)
                .with_format(format)
                .with_renderer(renderer)
                .with_invert(invert)
                .build(),
            _ => Err(DotGraphError::ConfigurationError {
                message: "Invalid command type for RenderOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderOptions);

/// Execute the render command for writing DOT files and images
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderOptions::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}
