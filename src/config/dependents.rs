//! Dependents command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::error::DotGraphError;

#[derive(Debug, Clone)]
pub struct DependentsConfig {
    pub manifest: PathBuf,
    pub node: String,
    pub format: OutputFormat,
}

impl DependentsConfig {
    pub fn builder() -> DependentsConfigBuilder {
        DependentsConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct DependentsConfigBuilder {
    manifest: Option<PathBuf>,
    node: Option<String>,
    format: Option<OutputFormat>,
}

impl DependentsConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, manifest: PathBuf) -> Self {
        self.manifest = Some(manifest);
        self
    }

    pub fn with_node(mut self, node: String) -> Self {
        self.node = Some(node);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for DependentsConfigBuilder {
    type Config = DependentsConfig;

    fn build(self) -> Result<Self::Config, DotGraphError> {
        Ok(DependentsConfig {
            manifest: self.manifest.ok_or_else(|| missing_field("manifest"))?,
            node: self.node.ok_or_else(|| missing_field("node"))?,
            format: self.format.unwrap_or(OutputFormat::Human),
        })
    }
}
