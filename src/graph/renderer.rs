//! DOT text serialization
//!
//! Output layout, one statement per line:
//!
//! ```text
//! digraph <name>
//!   {
//!     <graph attributes>;
//!     node [ <node defaults> ];
//!     edge [ <edge defaults> ];
//!     <subgraph blocks>;
//!     <nodes>;
//!     <edges>;
//!   }
//! ```
//!
//! A root graph only lists nodes that carry attributes or have no edges; a
//! subgraph lists all of its nodes so they are drawn inside it. Subgraph
//! blocks are embedded verbatim, only their first line picks up the statement
//! indent.

use std::fmt;

use petgraph::graph::NodeIndex;

use super::digraph::Graph;

const INDENT: &str = "    ";

impl Graph {
    /// The canonical DOT text for this graph, without a trailing newline
    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }

    fn is_isolated(&self, index: NodeIndex) -> bool {
        self.arena.neighbors_undirected(index).next().is_none()
    }

    fn keyword(&self) -> &'static str {
        if self.is_subgraph() { "subgraph" } else { "digraph" }
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{} {}", self.keyword(), self.name().unwrap_or_default()),
            "  {".to_string(),
        ];

        for attribute in self.graph_attribs() {
            lines.push(statement(attribute));
        }
        if !self.node_attribs().is_empty() {
            lines.push(statement(format!(
                "node [ {} ]",
                self.node_attribs().join(", ")
            )));
        }
        if !self.edge_attribs().is_empty() {
            lines.push(statement(format!(
                "edge [ {} ]",
                self.edge_attribs().join(", ")
            )));
        }

        for subgraph in self.subgraphs() {
            lines.push(statement(subgraph.to_text()));
        }

        let list_all_nodes = self.is_subgraph();
        for node in self.nodes() {
            if list_all_nodes
                || !node.attributes().is_empty()
                || self.is_isolated(node.index())
            {
                lines.push(statement(node));
            }
        }
        for edge in self.edges() {
            lines.push(statement(edge));
        }

        lines.push("  }".to_string());
        lines
    }
}

fn statement(body: impl fmt::Display) -> String {
    format!("{INDENT}{body};")
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
