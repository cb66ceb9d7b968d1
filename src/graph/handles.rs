//! Borrowed handles onto nodes and edges
//!
//! Nodes and edges live in their graph's arena. A handle pairs an arena
//! index with a borrow of the owning graph, which is what lets a node create
//! outgoing edges (and their target nodes) in that same graph.

use std::fmt;

use petgraph::graph::{EdgeIndex, NodeIndex};

use super::digraph::Graph;
use crate::attribute::Attribute;

/// Anything an [`Attribute`] can be attached to
pub trait Attributed {
    fn attributes_mut(&mut self) -> &mut Vec<Attribute>;
}

/// Writes `[ a, b ]` after an element, or nothing when there are no
/// attributes
pub(crate) fn write_attribute_list(
    f: &mut fmt::Formatter<'_>,
    attributes: &[Attribute],
) -> fmt::Result {
    if attributes.is_empty() {
        return Ok(());
    }

    let texts: Vec<&str> = attributes.iter().map(Attribute::text).collect();
    write!(f, " [ {} ]", texts.join(", "))
}

/// Read-only view of a node
#[derive(Clone, Copy)]
pub struct NodeRef<'g> {
    graph: &'g Graph,
    index: NodeIndex,
}

impl<'g> NodeRef<'g> {
    pub(super) fn new(graph: &'g Graph, index: NodeIndex) -> Self {
        Self { graph, index }
    }

    pub fn index(&self) -> NodeIndex {
        self.index
    }

    pub fn name(&self) -> &'g str {
        self.graph.arena[self.index].name()
    }

    pub fn attributes(&self) -> &'g [Attribute] {
        self.graph.arena[self.index].attributes()
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.name())?;
        write_attribute_list(f, self.attributes())
    }
}

/// Read-only view of an edge
#[derive(Clone, Copy)]
pub struct EdgeRef<'g> {
    graph: &'g Graph,
    index: EdgeIndex,
}

impl<'g> EdgeRef<'g> {
    pub(super) fn new(graph: &'g Graph, index: EdgeIndex) -> Self {
        Self { graph, index }
    }

    pub fn index(&self) -> EdgeIndex {
        self.index
    }

    pub fn from(&self) -> NodeRef<'g> {
        NodeRef::new(self.graph, self.graph.arena[self.index].from())
    }

    pub fn to(&self) -> NodeRef<'g> {
        NodeRef::new(self.graph, self.graph.arena[self.index].to())
    }

    pub fn attributes(&self) -> &'g [Attribute] {
        self.graph.arena[self.index].attributes()
    }
}

impl fmt::Display for EdgeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" -> \"{}\"", self.from().name(), self.to().name())?;
        write_attribute_list(f, self.attributes())
    }
}

/// Mutable handle onto a node, borrowed from its graph
pub struct NodeMut<'g> {
    graph: &'g mut Graph,
    index: NodeIndex,
}

impl<'g> NodeMut<'g> {
    pub(super) fn new(graph: &'g mut Graph, index: NodeIndex) -> Self {
        Self { graph, index }
    }

    pub fn index(&self) -> NodeIndex {
        self.index
    }

    pub fn name(&self) -> &str {
        self.graph.arena[self.index].name()
    }

    pub fn attributes(&self) -> &[Attribute] {
        self.graph.arena[self.index].attributes()
    }

    pub fn add_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes_mut().push(attribute);
        self
    }

    pub fn label(self, text: &str) -> Self {
        self.add_attribute(Attribute::label(text))
    }

    /// Edge from this node to `target`, creating the target node and the
    /// edge if needed
    pub fn connect(self, target: &str) -> EdgeMut<'g> {
        let to = self.graph.node_index(target);
        let edge = self.graph.edge_index(self.index, to);
        EdgeMut::new(self.graph, edge)
    }

    /// Same as [`NodeMut::connect`] but keeps the handle on this node, so
    /// several targets can be chained
    pub fn connect_to(self, target: &str) -> Self {
        let to = self.graph.node_index(target);
        self.graph.edge_index(self.index, to);
        self
    }
}

impl Attributed for NodeMut<'_> {
    fn attributes_mut(&mut self) -> &mut Vec<Attribute> {
        &mut self.graph.arena[self.index].attributes
    }
}

/// Mutable handle onto an edge, borrowed from its graph
pub struct EdgeMut<'g> {
    graph: &'g mut Graph,
    index: EdgeIndex,
}

impl<'g> EdgeMut<'g> {
    pub(super) fn new(graph: &'g mut Graph, index: EdgeIndex) -> Self {
        Self { graph, index }
    }

    pub fn index(&self) -> EdgeIndex {
        self.index
    }

    pub fn from(&self) -> &str {
        EdgeRef::new(&*self.graph, self.index).from().name()
    }

    pub fn to(&self) -> &str {
        EdgeRef::new(&*self.graph, self.index).to().name()
    }

    pub fn attributes(&self) -> &[Attribute] {
        self.graph.arena[self.index].attributes()
    }

    pub fn add_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes_mut().push(attribute);
        self
    }

    pub fn label(self, text: &str) -> Self {
        self.add_attribute(Attribute::label(text))
    }
}

impl Attributed for EdgeMut<'_> {
    fn attributes_mut(&mut self) -> &mut Vec<Attribute> {
        &mut self.graph.arena[self.index].attributes
    }
}
