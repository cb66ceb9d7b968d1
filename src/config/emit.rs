//! Emit command configuration

use std::path::PathBuf;

use crate::common::missing_field;
use crate::error::DotGraphError;

#[derive(Debug, Clone)]
pub struct EmitOptions {
    pub manifest: PathBuf,
    pub invert: bool,
    pub output: Option<PathBuf>,
}

impl EmitOptions {
    pub fn builder() -> EmitOptionsBuilder {
        EmitOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct EmitOptionsBuilder {
    manifest: Option<PathBuf>,
    invert: Option<bool>,
    output: Option<Option<PathBuf>>,
}

impl EmitOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, manifest: PathBuf) -> Self {
        self.manifest = Some(manifest);
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = Some(invert);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }
}

impl crate::common::ConfigBuilder for EmitOptionsBuilder {
    type Config = EmitOptions;

    fn build(self) -> Result<Self::Config, DotGraphError> {
        Ok(EmitOptions {
            manifest: self.manifest.ok_or_else(|| missing_field("manifest"))?,
            invert: self.invert.unwrap_or(false),
            output: self.output.ok_or_else(|| missing_field("output"))?,
        })
    }
}
