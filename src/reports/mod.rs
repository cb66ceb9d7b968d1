//! Report generation for reverse lookups
//!
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::error::DotGraphError;
use crate::graph::Graph;

/// Nodes with an edge pointing at `node`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentsReport {
    pub node: String,
    pub known: bool,
    pub dependents: Vec<String>,
}

impl DependentsReport {
    /// Answer the lookup through the inverted graph
    pub fn from_graph(graph: &Graph, node: &str) -> Self {
        let inverted = graph.invert();
        Self {
            node: node.to_string(),
            known: inverted.contains_node(node),
            dependents: inverted
                .successors(node)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Common trait for all report generators
pub trait ReportGenerator {
    fn generate_report(&self, report: &DependentsReport) -> Result<String, DotGraphError>;
}

pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
