//! XGMML interchange export for KAM subgraphs
//!
//! Writes the Cytoscape-compatible XGMML dialect the downstream tooling
//! expects: single-quoted attributes, `att` entries for function and
//! relationship types, and `graphics` sub-elements styled from the static
//! tables in [`crate::style`]. Attribute names and document shape are a
//! literal wire contract; do not reformat them.
//!
//! Document ordering (root open, all nodes, all edges, root close) is
//! enforced by construction: [`XgmmlWriter`] only writes nodes and must be
//! consumed into an [`XgmmlEdgeWriter`] before any edge can be written,
//! which in turn must be consumed by [`XgmmlEdgeWriter::finish`] to close
//! the document.

use std::collections::{HashMap, HashSet};
use std::io::{self, Write};

use kamgraph_core::{Kam, KamEdge, KamNode, KamPath, NodeId};
use rand::Rng;

use crate::style;

/// A free-text term supporting a node, supplied by the knowledge store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportingTerm {
    pub label: String,
}

impl SupportingTerm {
    pub fn new(label: impl Into<String>) -> Self {
        SupportingTerm {
            label: label.into(),
        }
    }
}

/// Boundary to the external knowledge store: per-node supporting terms,
/// looked up once per node during export.
pub trait AnnotationSource {
    fn supporting_terms(&self, node: &KamNode) -> Vec<SupportingTerm>;
}

/// Annotation source for exports that carry no supporting terms.
pub struct NoAnnotations;

impl AnnotationSource for NoAnnotations {
    fn supporting_terms(&self, _node: &KamNode) -> Vec<SupportingTerm> {
        Vec::new()
    }
}

impl AnnotationSource for HashMap<NodeId, Vec<SupportingTerm>> {
    fn supporting_terms(&self, node: &KamNode) -> Vec<SupportingTerm> {
        self.get(&node.id).cloned().unwrap_or_default()
    }
}

/// Produces an (x, y) position for each emitted node.
pub trait Layout {
    fn place(&mut self) -> (i64, i64);
}

/// Scatters nodes uniformly over a 200x200 region, matching the layout the
/// visualization tooling expects to rearrange anyway.
pub struct ScatterLayout {
    rng: rand::rngs::ThreadRng,
}

impl ScatterLayout {
    pub fn new() -> Self {
        ScatterLayout {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ScatterLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout for ScatterLayout {
    fn place(&mut self) -> (i64, i64) {
        (self.rng.gen_range(0..200), self.rng.gen_range(0..200))
    }
}

/// Places every node at one fixed position. Used by tests to make export
/// output byte-reproducible.
pub struct FixedLayout(pub i64, pub i64);

impl Layout for FixedLayout {
    fn place(&mut self) -> (i64, i64) {
        (self.0, self.1)
    }
}

/// Escape a label for single-quoted XGMML attributes.
///
/// Only `&` and `'` are substituted, exactly as the consuming tooling
/// expects; `<`, `>`, and `"` pass through unchanged.
fn escape_label(label: &str) -> String {
    label.replace('&', "&amp;").replace('\'', "&quot;")
}

/// Open XGMML document in its node-emission phase.
#[must_use = "the document is incomplete until finish() is called"]
pub struct XgmmlWriter<W: Write> {
    out: W,
}

impl<W: Write> XgmmlWriter<W> {
    /// Write the document root and begin the node phase.
    pub fn begin(mut out: W, title: &str) -> io::Result<Self> {
        write!(
            out,
            "<graph xmlns='http://www.cs.rpi.edu/XGMML' \
             xmlns:ns2='http://www.w3.org/1999/xlink' \
             xmlns:cy='http://www.cytoscape.org' \
             Graphic='1' label='{title}' directed='1'>\n"
        )?;
        Ok(XgmmlWriter { out })
    }

    /// Write one node element with its supporting terms and position.
    pub fn node(
        &mut self,
        node: &KamNode,
        terms: &[SupportingTerm],
        position: (i64, i64),
    ) -> io::Result<()> {
        let label = escape_label(&node.label);
        let parameters = terms
            .iter()
            .map(|t| escape_label(&t.label))
            .collect::<Vec<_>>()
            .join("&#10;");
        let (x, y) = position;

        write!(self.out, "  <node label='{}' id='{}'>\n", label, node.id)?;
        write!(
            self.out,
            "    <att name='function type' value='{}' />\n",
            node.function.display_value()
        )?;
        write!(
            self.out,
            "    <att name='parameters' value='{parameters}' />\n"
        )?;
        write!(
            self.out,
            "    <graphics type='{}' fill='{}' x='{}' y='{}' h='20.0' w='80.0' \
             cy:nodeLabel='{}'/>\n",
            style::node_shape(node.function),
            style::node_color(node.function),
            x,
            y,
            parameters
        )?;
        write!(self.out, "  </node>\n")
    }

    /// End the node phase; edges may be written from here on.
    pub fn into_edge_writer(self) -> XgmmlEdgeWriter<W> {
        XgmmlEdgeWriter { out: self.out }
    }
}

/// Open XGMML document in its edge-emission phase.
#[must_use = "the document is incomplete until finish() is called"]
pub struct XgmmlEdgeWriter<W: Write> {
    out: W,
}

impl<W: Write> XgmmlEdgeWriter<W> {
    /// Write one edge element between two already-emitted nodes.
    pub fn edge(&mut self, source: &KamNode, target: &KamNode, edge: &KamEdge) -> io::Result<()> {
        let rel = edge.relationship.display_value();
        write!(
            self.out,
            "  <edge label='{} ({}) {}' source='{}' target='{}'>\n",
            escape_label(&source.label),
            rel,
            escape_label(&target.label),
            edge.source,
            edge.target
        )?;
        write!(
            self.out,
            "    <att name='relationship type' value='{rel}' />\n"
        )?;
        write!(
            self.out,
            "    <graphics width='1' fill='{}' cy:targetArrow='1' cy:edgeLabel='{rel}'/>\n",
            style::edge_color(edge.relationship)
        )?;
        write!(self.out, "  </edge>\n")
    }

    /// Close the document and hand back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        write!(self.out, "</graph>")?;
        Ok(self.out)
    }
}

/// Renders whole KAMs or discovered paths into XGMML documents.
pub struct XgmmlExporter<L: Layout = ScatterLayout> {
    layout: L,
}

impl XgmmlExporter<ScatterLayout> {
    pub fn new() -> Self {
        XgmmlExporter {
            layout: ScatterLayout::new(),
        }
    }
}

impl Default for XgmmlExporter<ScatterLayout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Layout> XgmmlExporter<L> {
    /// Build an exporter over a caller-supplied layout.
    pub fn with_layout(layout: L) -> Self {
        XgmmlExporter { layout }
    }

    /// Export the entire KAM: every node, then every edge, in graph order.
    pub fn export_kam<W: Write>(
        &mut self,
        kam: &Kam,
        annotations: &dyn AnnotationSource,
        out: W,
    ) -> io::Result<()> {
        let nodes: Vec<&KamNode> = kam.nodes().collect();
        let edges: Vec<&KamEdge> = kam.edges().collect();
        self.write_subgraph(kam.name(), kam, &nodes, &edges, annotations, out)
    }

    /// Export a discovered path as a path-induced subgraph: the path's nodes
    /// in path order, then every KAM edge joining two path nodes.
    pub fn export_path<W: Write>(
        &mut self,
        kam: &Kam,
        path: &KamPath,
        annotations: &dyn AnnotationSource,
        out: W,
    ) -> io::Result<()> {
        let nodes: Vec<&KamNode> = path
            .nodes
            .iter()
            .map(|&id| {
                kam.node(id).ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("path node {id} is not in the kam"),
                    )
                })
            })
            .collect::<io::Result<_>>()?;

        let on_path: HashSet<NodeId> = path.nodes.iter().copied().collect();
        let edges: Vec<&KamEdge> = kam
            .edges()
            .filter(|e| on_path.contains(&e.source) && on_path.contains(&e.target))
            .collect();

        let first = path.nodes.first().map(|id| id.to_string()).unwrap_or_default();
        let last = path.nodes.last().map(|id| id.to_string()).unwrap_or_default();
        let title = format!("Path from {first} to {last}");
        self.write_subgraph(&title, kam, &nodes, &edges, annotations, out)
    }

    fn write_subgraph<W: Write>(
        &mut self,
        title: &str,
        kam: &Kam,
        nodes: &[&KamNode],
        edges: &[&KamEdge],
        annotations: &dyn AnnotationSource,
        out: W,
    ) -> io::Result<()> {
        let mut writer = XgmmlWriter::begin(out, title)?;
        for node in nodes {
            let terms = annotations.supporting_terms(node);
            let position = self.layout.place();
            writer.node(node, &terms, position)?;
        }

        let mut writer = writer.into_edge_writer();
        for edge in edges {
            let source = resolve(kam, edge.source)?;
            let target = resolve(kam, edge.target)?;
            writer.edge(source, target, edge)?;
        }
        writer.finish()?;

        tracing::debug!(
            "xgmml export '{}': {} nodes, {} edges",
            title,
            nodes.len(),
            edges.len()
        );
        Ok(())
    }
}

fn resolve(kam: &Kam, id: NodeId) -> io::Result<&KamNode> {
    kam.node(id).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("edge endpoint {id} is not in the kam"),
        )
    })
}
