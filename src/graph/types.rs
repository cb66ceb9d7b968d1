//! Core graph types
//!
//! Node and edge weights stored in the graph arena. Both carry an ordered
//! list of attributes; insertion order is preserved in the output.

use petgraph::graph::NodeIndex;

use crate::attribute::Attribute;

/// A named vertex
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) attributes: Vec<Attribute>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }
}

/// A directed connection between two nodes of the same graph
#[derive(Debug, Clone)]
pub struct Edge {
    pub(crate) from: NodeIndex,
    pub(crate) to: NodeIndex,
    pub(crate) attributes: Vec<Attribute>,
}

impl Edge {
    pub fn new(from: NodeIndex, to: NodeIndex) -> Self {
        Self {
            from,
            to,
            attributes: Vec::new(),
        }
    }

    pub fn from(&self) -> NodeIndex {
        self.from
    }

    pub fn to(&self) -> NodeIndex {
        self.to
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}
