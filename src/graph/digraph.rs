use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

use super::handles::{EdgeMut, EdgeRef, NodeMut, NodeRef};
use super::types::{Edge, Node};
use crate::attribute::Attribute;
use crate::constants::rankdir;
use crate::error::DotGraphError;
use crate::writer::{DotRenderer, GraphWriter, WrittenGraph};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a [`Graph`], used as the non-owning back-reference from a
/// subgraph to the graph that holds it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(u64);

impl GraphId {
    fn next() -> Self {
        Self(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Builder for one (possibly nested) directed graph description
///
/// Nodes are unique by name and created on first reference. Edges are unique
/// per `(from, to)` pair and are kept grouped by source node, in the order the
/// first edge out of each source was declared.
#[derive(Debug)]
pub struct Graph {
    pub(super) id: GraphId,
    pub(super) name: Option<String>,
    pub(super) owner: Option<GraphId>,
    pub(super) arena: DiGraph<Node, Edge>,
    pub(super) node_indices: HashMap<String, NodeIndex>,
    pub(super) adjacency: Vec<(NodeIndex, Vec<(NodeIndex, EdgeIndex)>)>,
    pub(super) subgraphs: Vec<Graph>,
    pub(super) graph_attribs: Vec<String>,
    pub(super) node_attribs: Vec<String>,
    pub(super) edge_attribs: Vec<String>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create an empty, unnamed graph
    pub fn new() -> Self {
        Self {
            id: GraphId::next(),
            name: None,
            owner: None,
            arena: DiGraph::new(),
            node_indices: HashMap::new(),
            adjacency: Vec::new(),
            subgraphs: Vec::new(),
            graph_attribs: Vec::new(),
            node_attribs: Vec::new(),
            edge_attribs: Vec::new(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    /// Create a graph and run `setup` against it before handing it back
    pub fn build<F>(name: Option<&str>, setup: F) -> Self
    where
        F: FnOnce(&mut Graph),
    {
        let mut graph = Self::with_name(name);
        setup(&mut graph);
        graph
    }

    /// Like [`Graph::build`], for setup code that can fail
    pub fn try_build<F>(name: Option<&str>, setup: F) -> Result<Self, DotGraphError>
    where
        F: FnOnce(&mut Graph) -> Result<(), DotGraphError>,
    {
        let mut graph = Self::with_name(name);
        setup(&mut graph)?;
        Ok(graph)
    }

    fn with_name(name: Option<&str>) -> Self {
        match name {
            Some(name) => Self::named(name),
            None => Self::new(),
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The graph holding this one as a subgraph, if any
    pub fn owner(&self) -> Option<GraphId> {
        self.owner
    }

    pub fn is_subgraph(&self) -> bool {
        self.owner.is_some()
    }

    // ------------------------------------------------------------------
    // Nodes and edges
    // ------------------------------------------------------------------

    /// Return the node called `name`, creating it if it does not exist yet
    pub fn node(&mut self, name: &str) -> NodeMut<'_> {
        let index = self.node_index(name);
        NodeMut::new(self, index)
    }

    pub fn get_node(&self, name: &str) -> Option<NodeRef<'_>> {
        self.node_indices
            .get(name)
            .map(|&index| NodeRef::new(self, index))
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.node_indices.contains_key(name)
    }

    /// Nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.arena
            .node_indices()
            .map(move |index| NodeRef::new(self, index))
    }

    pub fn node_names(&self) -> Vec<&str> {
        self.arena.node_weights().map(Node::name).collect()
    }

    pub fn node_count(&self) -> usize {
        self.arena.node_count()
    }

    /// Declare a chain of edges: `["a", "b", "c"]` yields `a -> b` and
    /// `b -> c`
    pub fn edge<S: AsRef<str>>(&mut self, names: &[S]) -> Result<&mut Self, DotGraphError> {
        if names.len() < 2 {
            return Err(DotGraphError::InsufficientArguments { given: names.len() });
        }

        let indices: Vec<NodeIndex> = names
            .iter()
            .map(|name| self.node_index(name.as_ref()))
            .collect();
        for pair in indices.windows(2) {
            if let [from, to] = pair {
                self.edge_index(*from, *to);
            }
        }

        Ok(self)
    }

    /// Return the edge `from -> to`, creating both nodes and the edge on
    /// demand
    pub fn connect(&mut self, from: &str, to: &str) -> EdgeMut<'_> {
        self.node(from).connect(to)
    }

    pub fn get_edge(&self, from: &str, to: &str) -> Option<EdgeRef<'_>> {
        let from = *self.node_indices.get(from)?;
        let to = *self.node_indices.get(to)?;
        self.arena
            .find_edge(from, to)
            .map(|index| EdgeRef::new(self, index))
    }

    /// Edges grouped by source, then by destination, in declaration order
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> {
        self.adjacency.iter().flat_map(move |(_, targets)| {
            targets
                .iter()
                .map(move |&(_, edge)| EdgeRef::new(self, edge))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.arena.edge_count()
    }

    /// Names of the nodes `name` has an edge to, in declaration order
    pub fn successors(&self, name: &str) -> Vec<&str> {
        let Some(&source) = self.node_indices.get(name) else {
            return Vec::new();
        };

        self.adjacency
            .iter()
            .find(|(from, _)| *from == source)
            .map(|(_, targets)| {
                targets
                    .iter()
                    .map(|&(to, _)| self.arena[to].name())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn node_index(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.node_indices.get(name) {
            return index;
        }

        let index = self.arena.add_node(Node::new(name));
        self.node_indices.insert(name.to_string(), index);
        index
    }

    pub(crate) fn edge_index(&mut self, from: NodeIndex, to: NodeIndex) -> EdgeIndex {
        if let Some(index) = self.arena.find_edge(from, to) {
            return index;
        }

        let index = self.arena.add_edge(from, to, Edge::new(from, to));
        match self.adjacency.iter_mut().find(|(source, _)| *source == from) {
            Some((_, targets)) => targets.push((to, index)),
            None => self.adjacency.push((from, vec![(to, index)])),
        }
        index
    }

    // ------------------------------------------------------------------
    // Subgraphs
    // ------------------------------------------------------------------

    /// Create a subgraph owned by this graph, run `setup` against it and
    /// return it
    pub fn subgraph<F>(&mut self, name: Option<&str>, setup: F) -> &mut Graph
    where
        F: FnOnce(&mut Graph),
    {
        let subgraph = Graph::build(name, setup);
        self.push_subgraph(subgraph)
    }

    /// Adopt a graph that was built on its own
    pub fn attach_subgraph(&mut self, subgraph: Graph) -> &mut Self {
        self.push_subgraph(subgraph);
        self
    }

    fn push_subgraph(&mut self, mut subgraph: Graph) -> &mut Graph {
        subgraph.owner = Some(self.id);
        let position = self.subgraphs.len();
        self.subgraphs.push(subgraph);
        &mut self.subgraphs[position]
    }

    pub fn subgraphs(&self) -> &[Graph] {
        &self.subgraphs
    }

    // ------------------------------------------------------------------
    // Graph-level settings and default attribute blocks
    // ------------------------------------------------------------------

    pub fn graph_attribs(&self) -> &[String] {
        &self.graph_attribs
    }

    pub fn graph_attribs_mut(&mut self) -> &mut Vec<String> {
        &mut self.graph_attribs
    }

    pub fn node_attribs(&self) -> &[String] {
        &self.node_attribs
    }

    pub fn node_attribs_mut(&mut self) -> &mut Vec<String> {
        &mut self.node_attribs
    }

    pub fn edge_attribs(&self) -> &[String] {
        &self.edge_attribs
    }

    pub fn edge_attribs_mut(&mut self) -> &mut Vec<String> {
        &mut self.edge_attribs
    }

    /// Append an attribute to the graph-level settings
    pub fn graph_attribute(&mut self, attribute: Attribute) -> &mut Self {
        self.graph_attribs.push(attribute.to_string());
        self
    }

    /// Append an attribute to the `node [ ... ]` defaults
    pub fn node_default(&mut self, attribute: Attribute) -> &mut Self {
        self.node_attribs.push(attribute.to_string());
        self
    }

    /// Append an attribute to the `edge [ ... ]` defaults
    pub fn edge_default(&mut self, attribute: Attribute) -> &mut Self {
        self.edge_attribs.push(attribute.to_string());
        self
    }

    pub fn label(&mut self, text: &str) -> &mut Self {
        self.graph_attribute(Attribute::label(text))
    }

    /// Set `rankdir`; top-to-bottom unless overridden
    pub fn orient(&mut self, direction: Option<&str>) -> &mut Self {
        let direction = direction.unwrap_or(rankdir::TOP_TO_BOTTOM);
        self.graph_attribute(Attribute::pair("rankdir", direction))
    }

    /// Set `rankdir`; left-to-right unless overridden
    pub fn rotate(&mut self, direction: Option<&str>) -> &mut Self {
        self.orient(Some(direction.unwrap_or(rankdir::LEFT_TO_RIGHT)))
    }

    /// Draw every node as a box by default
    pub fn boxes(&mut self) -> &mut Self {
        self.node_default(Attribute::shape("box"))
    }

    // The helpers below only build attributes; attach them yourself.

    pub fn color(&self, color: &str) -> Attribute {
        Attribute::color(color)
    }

    pub fn fillcolor(&self, color: &str) -> Attribute {
        Attribute::fillcolor(color)
    }

    pub fn colorscheme(&self, scheme: &str) -> Attribute {
        Attribute::colorscheme(scheme)
    }

    pub fn font(&self, name: &str, size: Option<u32>) -> Attribute {
        Attribute::font(name, size)
    }

    pub fn shape(&self, shape: &str) -> Attribute {
        Attribute::shape(shape)
    }

    pub fn style(&self, style: &str) -> Attribute {
        Attribute::style(style)
    }

    // ------------------------------------------------------------------
    // Derived graphs and output
    // ------------------------------------------------------------------

    /// A new graph with the same node names and every edge reversed
    ///
    /// Attributes and subgraphs are not carried over.
    pub fn invert(&self) -> Graph {
        let mut inverted = Graph::new();

        for node in self.arena.node_weights() {
            inverted.node_index(node.name());
        }
        for edge in self.edges() {
            let from = inverted.node_index(edge.to().name());
            let to = inverted.node_index(edge.from().name());
            inverted.edge_index(from, to);
        }

        inverted
    }

    /// Write `<path>.dot` and, when `format` is non-empty, render
    /// `<path>.<format>` with Graphviz
    pub fn write(&self, path: &Path, format: Option<&str>) -> Result<WrittenGraph, DotGraphError> {
        GraphWriter::new(DotRenderer::default()).write(self, path, format)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        graph.node("a").connect_to("b");
        graph
    }

    #[test]
    fn test_node_is_created_once() {
        let mut graph = Graph::new();

        let first = graph.node("a").index();
        let second = graph.node("a").index();

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_nodes_created_by_connect() {
        let graph = sample_graph();

        let mut names = graph.node_names();
        names.sort();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_edge_chain() {
        let mut graph = Graph::new();
        graph.edge(&["a", "b", "c"]).unwrap();

        assert_eq!(graph.node_names(), vec!["a", "b", "c"]);
        assert!(graph.get_edge("a", "b").is_some());
        assert!(graph.get_edge("b", "c").is_some());
        assert!(graph.get_edge("a", "c").is_none());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_edge_requires_two_names() {
        let mut graph = Graph::new();

        let err = graph.edge(&["a"]).unwrap_err();
        assert!(matches!(
            err,
            DotGraphError::InsufficientArguments { given: 1 }
        ));

        let empty: [&str; 0] = [];
        assert!(graph.edge(&empty).is_err());
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_duplicate_edges_are_reused() {
        let mut graph = Graph::new();
        graph.edge(&["a", "b"]).unwrap();
        graph.edge(&["a", "b"]).unwrap();

        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_successors_keep_declaration_order() {
        let mut graph = sample_graph();
        graph.connect("a", "c");

        assert_eq!(graph.successors("a"), vec!["b", "c"]);
        assert!(graph.successors("b").is_empty());
        assert!(graph.successors("missing").is_empty());
    }

    #[test]
    fn test_invert() {
        let mut graph = sample_graph();
        graph.connect("a", "c");

        let inverted = graph.invert();

        assert_eq!(inverted.successors("b"), vec!["a"]);
        assert_eq!(inverted.successors("c"), vec!["a"]);
        assert!(inverted.successors("a").is_empty());
        assert_eq!(inverted.node_names(), graph.node_names());
    }

    #[test]
    fn test_invert_drops_attributes_and_keeps_original() {
        let mut graph = sample_graph();
        graph.node("a").label("start");
        graph.subgraph(Some("inner"), |_| {});

        let inverted = graph.invert();

        assert!(inverted.nodes().all(|node| node.attributes().is_empty()));
        assert!(inverted.subgraphs().is_empty());
        assert!(graph.get_edge("a", "b").is_some());
        assert!(graph.get_edge("b", "a").is_none());
    }

    #[test]
    fn test_invert_self_loop() {
        let mut graph = Graph::new();
        graph.connect("a", "a");

        assert_eq!(graph.invert().successors("a"), vec!["a"]);
    }

    #[test]
    fn test_attach_subgraph_sets_owner() {
        let mut graph = sample_graph();
        let subgraph = Graph::named("blah");
        let subgraph_id = subgraph.id();

        graph.attach_subgraph(subgraph);

        assert_eq!(graph.subgraphs().len(), 1);
        assert_eq!(graph.subgraphs()[0].id(), subgraph_id);
        assert_eq!(graph.subgraphs()[0].owner(), Some(graph.id()));
    }

    #[test]
    fn test_subgraph_runs_setup() {
        let mut graph = sample_graph();
        let parent = graph.id();
        let mut ran = None;

        let subgraph = graph.subgraph(Some("blah"), |_| ran = Some(42));

        assert_eq!(subgraph.owner(), Some(parent));
        assert_eq!(subgraph.name(), Some("blah"));
        assert_eq!(ran, Some(42));
    }

    #[test]
    fn test_build_runs_setup() {
        let graph = Graph::build(None, |g| {
            g.connect("a", "b");
        });

        assert_eq!(graph.edge_count(), 1);
        assert!(graph.owner().is_none());
    }

    #[test]
    fn test_try_build_propagates_errors() {
        let result = Graph::try_build(Some("g"), |g| g.edge(&["lonely"]).map(|_| ()));
        assert!(result.is_err());
    }

    #[test]
    fn test_orient() {
        let mut graph = sample_graph();
        graph.orient(Some("blah"));
        assert_eq!(graph.graph_attribs(), &["rankdir = blah".to_string()]);
    }

    #[test]
    fn test_orient_default() {
        let mut graph = sample_graph();
        graph.orient(None);
        assert_eq!(graph.graph_attribs(), &["rankdir = TB".to_string()]);
    }

    #[test]
    fn test_rotate() {
        let mut graph = sample_graph();
        graph.rotate(Some("blah"));
        assert_eq!(graph.graph_attribs(), &["rankdir = blah".to_string()]);
    }

    #[test]
    fn test_rotate_default() {
        let mut graph = sample_graph();
        graph.rotate(None);
        assert_eq!(graph.graph_attribs(), &["rankdir = LR".to_string()]);
    }

    #[test]
    fn test_label() {
        let mut graph = Graph::new();
        graph.label("blah");
        assert_eq!(graph.graph_attribs(), &["label = \"blah\"".to_string()]);
    }

    #[test]
    fn test_attribute_helpers_do_not_attach() {
        let graph = sample_graph();

        assert_eq!(graph.color("blah").text(), "color = blah");
        assert_eq!(graph.fillcolor("blah").text(), "fillcolor = blah");
        assert_eq!(graph.colorscheme("blah").text(), "colorscheme = blah");
        assert_eq!(graph.shape("blah").text(), "shape = blah");
        assert_eq!(graph.style("blah").text(), "style = blah");
        assert_eq!(
            graph.font("blah", Some(12)).text(),
            "fontname = \"blah\", fontsize = 12"
        );
        assert!(graph.nodes().all(|node| node.attributes().is_empty()));
        assert!(graph.graph_attribs().is_empty());
    }

    #[test]
    fn test_boxes() {
        let mut graph = Graph::new();
        graph.boxes();
        assert_eq!(graph.node_attribs(), &["shape = box".to_string()]);
    }
}
