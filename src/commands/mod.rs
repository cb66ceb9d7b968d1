//! Command implementations for the dotgraph CLI
//!
//! - emit: print or save the DOT text of a manifest
//! - render: write the DOT file and render an image from it
//! - dependents: list the nodes pointing at a given node

pub mod dependents;
pub mod emit;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Emit { .. } => emit::execute_emit_command(command),
        Commands::Render { .. } => render::execute_render_command(command),
        Commands::Dependents { .. } => dependents::execute_dependents_command(command),
    }
}
