use std::path::PathBuf;
use std::process::ExitStatus;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid graph manifest '{file}'")]
#[diagnostic(
    code(dotgraph::manifest_parse_error),
    help("Check the TOML syntax and field names near the highlighted position")
)]
pub struct ManifestParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("problem here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum DotGraphError {
    #[error("An edge needs at least 2 node names, got {given}")]
    #[diagnostic(
        code(dotgraph::insufficient_arguments),
        help("Pass the source and destination node names (and any further hops)")
    )]
    InsufficientArguments { given: usize },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(dotgraph::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}'")]
    #[diagnostic(
        code(dotgraph::io_error),
        help("Check that the parent directory exists and is writable")
    )]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ManifestParseError(Box<ManifestParseError>),

    #[error("Renderer command `{command}` exited with {status}")]
    #[diagnostic(
        code(dotgraph::render_failed),
        help("Make sure Graphviz is installed and the output format is supported")
    )]
    RenderFailed { command: String, status: ExitStatus },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(dotgraph::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(dotgraph::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(dotgraph::io_error),
        help("Check file permissions and that the renderer binary is on PATH")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(dotgraph::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
