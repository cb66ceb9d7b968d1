//! Persisting DOT text and handing it to an external renderer
//!
//! `GraphWriter` writes `<path>.dot` and, when an output format is given,
//! asks a [`Renderer`] to run the equivalent of
//! `dot -T<format> <path>.dot > <path>.<format>`. Rendering itself is a black
//! box; the only contract is the command that gets issued.

use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::constants::render::{DEFAULT_RENDERER, SOURCE_EXTENSION};
use crate::error::DotGraphError;
use crate::graph::Graph;

/// One renderer invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCommand {
    pub renderer: String,
    pub format: String,
    pub source: PathBuf,
    pub target: PathBuf,
}

impl fmt::Display for RenderCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -T{} {} > {}",
            self.renderer,
            self.format,
            self.source.display(),
            self.target.display()
        )
    }
}

/// Something that can turn a DOT file into an image
pub trait Renderer {
    /// Name of the binary that appears in the issued command line
    fn binary(&self) -> &str;

    fn render(&self, command: &RenderCommand) -> Result<(), DotGraphError>;
}

/// Runs a Graphviz binary, with its stdout redirected into the target file
#[derive(Debug, Clone)]
pub struct DotRenderer {
    binary: String,
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_RENDERER)
    }
}

impl DotRenderer {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Renderer for DotRenderer {
    fn binary(&self) -> &str {
        &self.binary
    }

    fn render(&self, command: &RenderCommand) -> Result<(), DotGraphError> {
        let output = File::create(&command.target).map_err(|e| DotGraphError::FileWriteError {
            path: command.target.clone(),
            source: e,
        })?;

        let status = Command::new(&command.renderer)
            .arg(format!("-T{}", command.format))
            .arg(&command.source)
            .stdout(Stdio::from(output))
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(DotGraphError::RenderFailed {
                command: command.to_string(),
                status,
            })
        }
    }
}

/// Files produced by [`GraphWriter::write`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenGraph {
    pub source: PathBuf,
    pub image: Option<PathBuf>,
}

pub struct GraphWriter<R: Renderer> {
    renderer: R,
}

impl<R: Renderer> GraphWriter<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Write `<path>.dot`, then render `<path>.<format>` if `format` is
    /// present and non-empty
    pub fn write(
        &self,
        graph: &Graph,
        path: &Path,
        format: Option<&str>,
    ) -> Result<WrittenGraph, DotGraphError> {
        let source = with_extension_appended(path, SOURCE_EXTENSION);
        fs::write(&source, format!("{}\n", graph.to_text())).map_err(|e| {
            DotGraphError::FileWriteError {
                path: source.clone(),
                source: e,
            }
        })?;

        let Some(format) = format.filter(|format| !format.is_empty()) else {
            return Ok(WrittenGraph {
                source,
                image: None,
            });
        };

        let command = RenderCommand {
            renderer: self.renderer.binary().to_string(),
            format: format.to_string(),
            source: source.clone(),
            target: with_extension_appended(path, format),
        };
        self.renderer.render(&command)?;

        Ok(WrittenGraph {
            source,
            image: Some(command.target),
        })
    }
}

/// `base` + `.` + `extension`, without replacing any extension `base`
/// already has
fn with_extension_appended(base: &Path, extension: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}
