//! Configuration constants for dotgraph
//!
//! Defaults used by the writer and the CLI. Most of them can be overridden
//! through command-line flags or `DOTGRAPH_*` environment variables.

/// Rendering defaults
pub mod render {
    /// Graphviz binary invoked to turn DOT text into an image
    pub const DEFAULT_RENDERER: &str = "dot";

    /// Extension of the DOT source file written next to the image
    pub const SOURCE_EXTENSION: &str = "dot";
}

/// Layout direction presets for `rankdir`
pub mod rankdir {
    pub const TOP_TO_BOTTOM: &str = "TB";
    pub const LEFT_TO_RIGHT: &str = "LR";
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}
