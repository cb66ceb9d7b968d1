//! # Graph Construction and Serialization Module
//!
//! This module holds the in-memory model of a directed graph description and
//! turns it into DOT text.
//!
//! ## Components
//!
//! ### Model
//! - **Graph**: the aggregate root. Owns nodes (unique by name), edges
//!   (unique per source/destination pair), nested subgraphs and the
//!   graph-level, node-default and edge-default attribute lists
//! - **Node** / **Edge**: arena weights carrying ordered attribute lists
//! - **NodeMut** / **EdgeMut**: borrowed handles used for fluent building
//!
//! ### Serialization
//! - `Graph::to_text` renders the deterministic DOT text, recursing into
//!   subgraphs
//!
//! ## Example
//!
//! ```
//! use dotgraph::graph::Graph;
//!
//! # fn main() -> Result<(), dotgraph::error::DotGraphError> {
//! let mut graph = Graph::new();
//! graph.boxes();
//! graph.edge(&["parser", "lexer", "source"])?;
//!
//! let attribute = graph.color("blue") + graph.shape("ellipse");
//! attribute.attach(graph.node("parser"));
//!
//! let text = graph.to_text();
//! assert!(text.starts_with("digraph \n  {"));
//! assert!(text.contains(r#""parser" [ color = blue, shape = ellipse ];"#));
//! assert!(text.contains(r#""lexer" -> "source";"#));
//! # Ok(())
//! # }
//! ```

mod digraph;
mod handles;
mod renderer;
mod types;

pub use digraph::{Graph, GraphId};
pub use handles::{Attributed, EdgeMut, EdgeRef, NodeMut, NodeRef};
pub use types::{Edge, Node};
