//! Command executors that handle the actual logic for each command

pub mod dependents;
pub mod emit;
pub mod render;

use std::path::Path;

use miette::{Result, WrapErr};

use crate::graph::Graph;
use crate::manifest::GraphManifest;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Load the manifest's graph, inverted when requested
fn load_graph(manifest: &Path, invert: bool) -> Result<Graph> {
    let graph = GraphManifest::load_graph(manifest)
        .wrap_err_with(|| format!("Failed to load graph manifest '{}'", manifest.display()))?;

    Ok(if invert { graph.invert() } else { graph })
}
