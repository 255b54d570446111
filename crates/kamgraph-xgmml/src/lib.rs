//! Kamgraph XGMML — interchange-document export and style lookup

pub mod style;
pub mod xgmml;

#[cfg(test)]
pub mod tests;

pub use style::{edge_color, node_color, node_shape};
pub use xgmml::{
    AnnotationSource, FixedLayout, Layout, NoAnnotations, ScatterLayout, SupportingTerm,
    XgmmlEdgeWriter, XgmmlExporter, XgmmlWriter,
};
