//! TOML graph descriptions
//!
//! A manifest describes a graph declaratively so it can be emitted or
//! rendered from the command line:
//!
//! ```toml
//! name = "pipeline"
//! rankdir = "LR"
//! node_defaults = ["shape = box"]
//!
//! [[nodes]]
//! name = "parse"
//! attributes = ["color = blue"]
//!
//! [[edges]]
//! path = ["read", "parse", "emit"]
//! attributes = ["style = dashed"]
//!
//! [[subgraphs]]
//! name = "cluster_io"
//! edges = [{ path = ["read", "emit"] }]
//! ```

use std::collections::HashSet;
use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::attribute::Attribute;
use crate::error::{DotGraphError, ManifestParseError};
use crate::graph::Graph;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphManifest {
    pub name: Option<String>,
    pub label: Option<String>,
    pub rankdir: Option<String>,
    #[serde(default)]
    pub graph_attributes: Vec<String>,
    #[serde(default)]
    pub node_defaults: Vec<String>,
    #[serde(default)]
    pub edge_defaults: Vec<String>,
    #[serde(default)]
    pub nodes: Vec<NodeManifest>,
    #[serde(default)]
    pub edges: Vec<EdgeManifest>,
    #[serde(default)]
    pub subgraphs: Vec<GraphManifest>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeManifest {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<String>,
}

/// A chain of edges; `attributes` apply to every hop of the chain
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeManifest {
    pub path: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl GraphManifest {
    pub fn parse_file(path: &Path) -> Result<Self, DotGraphError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| DotGraphError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(&path.display().to_string(), content)
    }

    /// Read a manifest file and build its graph
    pub fn load_graph(path: &Path) -> Result<Graph, DotGraphError> {
        Self::parse_file(path)?.to_graph()
    }

    /// Parse manifest text; `file` names the source in diagnostics
    pub fn parse_str(file: &str, content: String) -> Result<Self, DotGraphError> {
        toml::from_str(&content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            DotGraphError::ManifestParseError(Box::new(ManifestParseError {
                file: file.to_string(),
                source_code: NamedSource::new(file, content.clone()),
                span,
                source: e,
            }))
        })
    }

    /// Build the described graph, subgraphs included
    pub fn to_graph(&self) -> Result<Graph, DotGraphError> {
        let mut graph = match &self.name {
            Some(name) => Graph::named(name.as_str()),
            None => Graph::new(),
        };
        self.apply(&mut graph)?;
        Ok(graph)
    }

    fn apply(&self, graph: &mut Graph) -> Result<(), DotGraphError> {
        if let Some(label) = &self.label {
            graph.label(label);
        }
        if let Some(rankdir) = &self.rankdir {
            graph.orient(Some(rankdir.as_str()));
        }
        graph
            .graph_attribs_mut()
            .extend(self.graph_attributes.iter().cloned());
        graph
            .node_attribs_mut()
            .extend(self.node_defaults.iter().cloned());
        graph
            .edge_attribs_mut()
            .extend(self.edge_defaults.iter().cloned());

        for node in &self.nodes {
            node.attributes
                .iter()
                .fold(graph.node(&node.name), |handle, attribute| {
                    handle.add_attribute(Attribute::new(attribute.as_str()))
                });
        }

        for edge in &self.edges {
            graph.edge(edge.path.as_slice())?;
            if edge.attributes.is_empty() {
                continue;
            }
            let mut seen = HashSet::new();
            for hop in edge.path.windows(2) {
                if let [from, to] = hop
                    && seen.insert((from.as_str(), to.as_str()))
                {
                    edge.attributes
                        .iter()
                        .fold(graph.connect(from, to), |handle, attribute| {
                            handle.add_attribute(Attribute::new(attribute.as_str()))
                        });
                }
            }
        }

        for subgraph in &self.subgraphs {
            graph.attach_subgraph(subgraph.to_graph()?);
        }

        Ok(())
    }
}
