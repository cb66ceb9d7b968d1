use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, ManifestArgs};
use crate::constants::render::DEFAULT_RENDERER;

#[derive(Parser)]
#[command(
    name = "dotgraph",
    about = "Build directed graph descriptions and render them with Graphviz",
    long_about = "dotgraph turns a TOML graph manifest into Graphviz DOT text. It can print the \
                  DOT text, write it next to a rendered image, or answer which nodes point at a \
                  given node by inverting the graph.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the DOT text for a graph manifest
    ///
    /// Builds the graph described by the manifest and writes its DOT text to
    /// stdout, or to a file when --output is given.
    #[command(
        long_about = "Build the graph described by a TOML manifest and emit its DOT text. With \
                      --invert every edge is reversed first (node names are kept, attributes \
                      and subgraphs are dropped)."
    )]
    Emit {
        #[command(flatten)]
        manifest: ManifestArgs,

        /// Reverse every edge before emitting
        #[arg(long, env = "DOTGRAPH_INVERT")]
        invert: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "DOTGRAPH_OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Write `<OUTPUT>.dot` and render `<OUTPUT>.<FORMAT>`
    ///
    /// Without --format only the DOT file is written and no renderer is
    /// invoked.
    #[command(
        long_about = "Write the DOT text to <OUTPUT>.dot and, when a format is given, run \
                      `<renderer> -T<format> <OUTPUT>.dot > <OUTPUT>.<format>`. Rendering is \
                      delegated entirely to the renderer binary (Graphviz `dot` by default)."
    )]
    Render {
        #[command(flatten)]
        manifest: ManifestArgs,

        /// Base path of the generated files, without extension
        #[arg(short, long, value_name = "BASE", env = "DOTGRAPH_OUTPUT")]
        output: PathBuf,

        /// Image format passed to the renderer, e.g. png or svg
        #[arg(short = 'T', long, env = "DOTGRAPH_RENDER_FORMAT")]
        format: Option<String>,

        /// Renderer binary
        #[arg(long, default_value = DEFAULT_RENDERER, env = "DOTGRAPH_RENDERER")]
        renderer: String,

        /// Reverse every edge before writing
        #[arg(long, env = "DOTGRAPH_INVERT")]
        invert: bool,
    },

    /// List the nodes that have an edge pointing at NODE
    #[command(
        long_about = "Answer a reverse-reachability question: which nodes point directly at \
                      NODE. The graph is inverted and the successors of NODE in the inverted \
                      graph are reported. Only the top-level graph is searched; nodes and \
                      edges declared inside subgraphs are not considered."
    )]
    Dependents {
        /// Node to look up
        #[arg(value_name = "NODE", env = "DOTGRAPH_NODE")]
        node: String,

        #[command(flatten)]
        manifest: ManifestArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "dotgraph", "render", "graph.toml", "--output", "out/graph", "-T", "png",
        ])
        .unwrap();

        match cli.command {
            Commands::Render {
                manifest,
                output,
                format,
                renderer,
                invert,
            } => {
                assert_eq!(manifest.manifest, PathBuf::from("graph.toml"));
                assert_eq!(output, PathBuf::from("out/graph"));
                assert_eq!(format.as_deref(), Some("png"));
                assert_eq!(renderer, "dot");
                assert!(!invert);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_parse_dependents() {
        let cli =
            Cli::try_parse_from(["dotgraph", "dependents", "lexer", "graph.toml", "-f", "json"])
                .unwrap();

        match cli.command {
            Commands::Dependents {
                node,
                manifest,
                format,
            } => {
                assert_eq!(node, "lexer");
                assert_eq!(manifest.manifest, PathBuf::from("graph.toml"));
                assert_eq!(format.format, OutputFormat::Json);
            }
            _ => panic!("Expected Dependents command"),
        }
    }
}
