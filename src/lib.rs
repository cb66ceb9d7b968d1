//! # dotgraph - Build Graphviz Digraphs from Rust
//!
//! dotgraph is a programmatic builder for directed graph descriptions. A
//! [`Graph`] collects nodes, edges, attributes and nested subgraphs, and
//! serializes them to deterministic Graphviz DOT text. Rendering to an image
//! is delegated to the Graphviz `dot` binary.
//!
//! ## Main Components
//!
//! - **Graph**: the aggregate root with a fluent construction API and the
//!   DOT serializer
//! - **Attribute**: opaque `key = value` fragments attached to nodes, edges
//!   or the graph's default blocks
//! - **Writer**: persists `<path>.dot` and runs the external renderer
//! - **Manifest**: TOML graph descriptions used by the CLI
//!
//! ## Usage
//!
//! ### Building a graph
//!
//! ```
//! use dotgraph::{Attribute, digraph};
//!
//! let graph = digraph(|g| {
//!     g.rotate(None);
//!     g.boxes();
//!     g.connect("parser", "lexer").label("tokens");
//!     g.node("lexer").connect_to("source").connect_to("errors");
//!     (Attribute::color("red") + Attribute::style("bold")).attach(g.node("errors"));
//! });
//!
//! let expected = [
//!     "digraph ",
//!     "  {",
//!     "    rankdir = LR;",
//!     "    node [ shape = box ];",
//!     r#"    "errors" [ color = red, style = bold ];"#,
//!     r#"    "parser" -> "lexer" [ label = "tokens" ];"#,
//!     r#"    "lexer" -> "source";"#,
//!     r#"    "lexer" -> "errors";"#,
//!     "  }",
//! ]
//! .join("\n");
//! assert_eq!(graph.to_text(), expected);
//! ```
//!
//! ### Reverse lookups
//!
//! ```
//! use dotgraph::Graph;
//!
//! # fn main() -> Result<(), dotgraph::DotGraphError> {
//! let mut graph = Graph::new();
//! graph.edge(&["app", "http", "tls"])?;
//! graph.edge(&["cli", "tls"])?;
//!
//! // Who points at `tls`?
//! let inverted = graph.invert();
//! assert_eq!(inverted.successors("tls"), vec!["http", "cli"]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Writing and rendering
//!
//! ```no_run
//! use std::path::Path;
//!
//! use dotgraph::Graph;
//!
//! # fn main() -> Result<(), dotgraph::DotGraphError> {
//! let mut graph = Graph::new();
//! graph.connect("a", "b");
//!
//! // Writes target/deps.dot, then runs `dot -Tsvg target/deps.dot > target/deps.svg`
//! graph.write(Path::new("target/deps"), Some("svg"))?;
//! # Ok(())
//! # }
//! ```

mod constants;

pub mod attribute;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod manifest;
pub mod reports;
pub mod writer;

pub use attribute::Attribute;
pub use common::ConfigBuilder;
pub use error::DotGraphError;
pub use graph::Graph;

/// Build an unnamed graph, running `setup` against it first
pub fn digraph<F>(setup: F) -> Graph
where
    F: FnOnce(&mut Graph),
{
    Graph::build(None, setup)
}

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
