//! Render command configuration

use std::path::PathBuf;

use crate::common::missing_field;
use crate::error::DotGraphError;

/// Options for writing the DOT file and rendering an image from it
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Manifest describing the graph
    pub manifest: PathBuf,
    /// Base path; `.dot` and `.<format>` are appended to it
    pub output: PathBuf,
    /// Image format, `None` to only write the DOT file
    pub format: Option<String>,
    /// Renderer binary
    pub renderer: String,
    pub invert: bool,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderOptionsBuilder {
    manifest: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<Option<String>>,
    renderer: Option<String>,
    invert: Option<bool>,
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, manifest: PathBuf) -> Self {
        self.manifest = Some(manifest);
        self
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_format(mut self, format: Option<String>) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_renderer(mut self, renderer: String) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = Some(invert);
        self
    }
}

impl crate::common::ConfigBuilder for RenderOptionsBuilder {
    type Config = RenderOptions;

    fn build(self) -> Result<Self::Config, DotGraphError> {
        let renderer = self.renderer.ok_or_else(|| missing_field("renderer"))?;
        if renderer.trim().is_empty() {
            return Err(DotGraphError::ConfigurationError {
                message: "Renderer binary must not be empty".to_string(),
            });
        }

        Ok(RenderOptions {
            manifest: self.manifest.ok_or_else(|| missing_field("manifest"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            renderer,
            invert: self.invert.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    fn complete_builder() -> RenderOptionsBuilder {
        RenderOptions::builder()
            .with_manifest(PathBuf::from("graph.toml"))
            .with_output(PathBuf::from("out/graph"))
            .with_format(Some("svg".to_string()))
            .with_renderer("dot".to_string())
    }

    #[test]
    fn test_build_render_options() {
        let options = complete_builder().with_invert(true).build().unwrap();

        assert_eq!(options.output, PathBuf::from("out/graph"));
        assert_eq!(options.format.as_deref(), Some("svg"));
        assert_eq!(options.renderer, "dot");
        assert!(options.invert);
    }

    #[test]
    fn test_empty_renderer_is_rejected() {
        let result = complete_builder().with_renderer("  ".to_string()).build();

        match result {
            Err(DotGraphError::ConfigurationError { message }) => {
                assert!(message.contains("Renderer"));
            }
            _ => panic!("Expected ConfigurationError"),
        }
    }

    #[test]
    fn test_missing_output() {
        let result = RenderOptions::builder()
            .with_manifest(PathBuf::from("graph.toml"))
            .with_format(None)
            .with_renderer("dot".to_string())
            .build();

        assert!(result.is_err());
    }
}
