//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::error::DotGraphError;

/// Graph manifest argument shared by every command
#[derive(Args, Debug, Clone)]
pub struct ManifestArgs {
    /// TOML file describing the graph
    #[arg(value_name = "MANIFEST", env = "DOTGRAPH_MANIFEST")]
    pub manifest: PathBuf,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "DOTGRAPH_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, DotGraphError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Commands) -> Result<Self, DotGraphError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::DotGraphError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Error for a builder field that was never set
pub(crate) fn missing_field(field: &str) -> DotGraphError {
    DotGraphError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            missing_field("output").to_string(),
            "Configuration error: Missing required field: output"
        );
    }
}
