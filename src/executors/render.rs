//! Render command executor

use console::style;
use miette::{Result, WrapErr};

use super::load_graph;
use crate::config::RenderOptions;
use crate::executors::CommandExecutor;
use crate::writer::{DotRenderer, GraphWriter};

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let graph = load_graph(&config.manifest, config.invert)?;

        eprintln!(
            "{} Writing graph with {} nodes and {} edges...",
            style("📊").cyan(),
            style(graph.node_count()).yellow(),
            style(graph.edge_count()).yellow()
        );

        let writer = GraphWriter::new(DotRenderer::new(config.renderer.as_str()));
        let written = writer
            .write(&graph, &config.output, config.format.as_deref())
            .wrap_err("Failed to write graph")?;

        eprintln!(
            "{} DOT source written to {}",
            style("✓").green(),
            style(written.source.display()).bold()
        );
        match written.image {
            Some(image) => eprintln!(
                "{} Image rendered to {}",
                style("✓").green(),
                style(image.display()).bold()
            ),
            None => eprintln!(
                "{} No format given, skipped rendering",
                style("ℹ").blue()
            ),
        }

        Ok(())
    }
}
