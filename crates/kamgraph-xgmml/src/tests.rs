//! Unit tests for kamgraph-xgmml

use std::collections::HashMap;

use kamgraph_core::*;

use crate::xgmml::*;

fn node(id: u64, label: &str, function: FunctionKind) -> KamNode {
    KamNode {
        id: NodeId(id),
        label: label.to_string(),
        function,
    }
}

fn edge(id: u64, source: u64, target: u64, relationship: RelationshipKind) -> KamEdge {
    KamEdge {
        id: EdgeId(id),
        source: NodeId(source),
        target: NodeId(target),
        relationship,
    }
}

fn tiny_kam() -> Kam {
    let nodes = vec![
        node(1, "p(HGNC:TP53)", FunctionKind::ProteinAbundance),
        node(2, "bp(GO:apoptosis)", FunctionKind::BiologicalProcess),
    ];
    let edges = vec![edge(10, 1, 2, RelationshipKind::Increases)];
    Kam::build("tiny", nodes, edges).unwrap()
}

fn diamond_kam() -> Kam {
    let nodes = vec![
        node(1, "p(HGNC:AKT1)", FunctionKind::ProteinAbundance),
        node(2, "kaof(p(HGNC:AKT1))", FunctionKind::KinaseActivity),
        node(3, "bp(GO:apoptosis)", FunctionKind::BiologicalProcess),
        node(4, "r(HGNC:AKT1)", FunctionKind::RnaAbundance),
    ];
    let edges = vec![
        edge(10, 1, 2, RelationshipKind::DirectlyIncreases),
        edge(11, 2, 3, RelationshipKind::Increases),
        edge(12, 1, 4, RelationshipKind::Association),
        edge(13, 4, 3, RelationshipKind::DirectlyIncreases),
    ];
    Kam::build("diamond", nodes, edges).unwrap()
}

fn export_tiny() -> String {
    let kam = tiny_kam();
    let mut annotations: HashMap<NodeId, Vec<SupportingTerm>> = HashMap::new();
    annotations.insert(
        NodeId(1),
        vec![
            SupportingTerm::new("p(HGNC:TP53)"),
            SupportingTerm::new("p(MGI:Trp53)"),
        ],
    );

    let mut out = Vec::new();
    XgmmlExporter::with_layout(FixedLayout(5, 7))
        .export_kam(&kam, &annotations, &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn full_document_matches_wire_contract() {
    let expected = "\
<graph xmlns='http://www.cs.rpi.edu/XGMML' xmlns:ns2='http://www.w3.org/1999/xlink' xmlns:cy='http://www.cytoscape.org' Graphic='1' label='tiny' directed='1'>
  <node label='p(HGNC:TP53)' id='1'>
    <att name='function type' value='proteinAbundance' />
    <att name='parameters' value='p(HGNC:TP53)&#10;p(MGI:Trp53)' />
    <graphics type='hor_ellipsis' fill='85,255,255' x='5' y='7' h='20.0' w='80.0' cy:nodeLabel='p(HGNC:TP53)&#10;p(MGI:Trp53)'/>
  </node>
  <node label='bp(GO:apoptosis)' id='2'>
    <att name='function type' value='biologicalProcess' />
    <att name='parameters' value='' />
    <graphics type='rhombus' fill='255,51,102' x='5' y='7' h='20.0' w='80.0' cy:nodeLabel=''/>
  </node>
  <edge label='p(HGNC:TP53) (increases) bp(GO:apoptosis)' source='1' target='2'>
    <att name='relationship type' value='increases' />
    <graphics width='1' fill='0,0,0' cy:targetArrow='1' cy:edgeLabel='increases'/>
  </edge>
</graph>";
    assert_eq!(export_tiny(), expected);
}

#[test]
fn export_is_deterministic_under_a_fixed_layout() {
    assert_eq!(export_tiny(), export_tiny());
}

#[test]
fn labels_escape_ampersand_and_apostrophe_only() {
    let nodes = vec![node(1, r#"p(X:a&b'c) <"odd">"#, FunctionKind::Abundance)];
    let kam = Kam::build("escapes", nodes, vec![]).unwrap();

    let mut out = Vec::new();
    XgmmlExporter::with_layout(FixedLayout(0, 0))
        .export_kam(&kam, &NoAnnotations, &mut out)
        .unwrap();
    let doc = String::from_utf8(out).unwrap();

    assert!(doc.contains(r#"label='p(X:a&amp;b&quot;c) <"odd">'"#));
    assert!(!doc.contains("&lt;"));
    assert!(!doc.contains("&gt;"));
}

#[test]
fn path_export_emits_only_the_path_induced_subgraph() {
    let kam = diamond_kam();
    let path = shortest_path(&kam, NodeId(1), NodeId(3)).unwrap().unwrap();

    let mut out = Vec::new();
    XgmmlExporter::with_layout(FixedLayout(0, 0))
        .export_path(&kam, &path, &NoAnnotations, &mut out)
        .unwrap();
    let doc = String::from_utf8(out).unwrap();

    assert!(doc.starts_with("<graph "));
    assert!(doc.contains("label='Path from 1 to 3'"));
    assert!(doc.contains("id='1'"));
    assert!(doc.contains("id='2'"));
    assert!(doc.contains("id='3'"));
    // the off-path node and its edges are left out
    assert!(!doc.contains("id='4'"));
    assert!(!doc.contains("association"));
    assert!(doc.contains("source='1' target='2'"));
    assert!(doc.contains("source='2' target='3'"));
    assert!(!doc.contains("source='4'"));
}

#[test]
fn path_nodes_appear_in_path_order_before_any_edge() {
    let kam = diamond_kam();
    let path = shortest_path(&kam, NodeId(1), NodeId(3)).unwrap().unwrap();

    let mut out = Vec::new();
    XgmmlExporter::with_layout(FixedLayout(0, 0))
        .export_path(&kam, &path, &NoAnnotations, &mut out)
        .unwrap();
    let doc = String::from_utf8(out).unwrap();

    let n1 = doc.find("id='1'").unwrap();
    let n2 = doc.find("id='2'").unwrap();
    let n3 = doc.find("id='3'").unwrap();
    let first_edge = doc.find("<edge ").unwrap();
    assert!(n1 < n2 && n2 < n3 && n3 < first_edge);
}

#[test]
fn export_writes_a_complete_document_to_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("tiny.xgmml");

    let kam = tiny_kam();
    let file = std::fs::File::create(&out_path).unwrap();
    XgmmlExporter::new()
        .export_kam(&kam, &NoAnnotations, file)
        .unwrap();

    let doc = std::fs::read_to_string(&out_path).unwrap();
    assert!(doc.starts_with("<graph "));
    assert!(doc.ends_with("</graph>"));
}

#[test]
fn scatter_layout_places_within_the_canvas() {
    let mut layout = ScatterLayout::new();
    for _ in 0..50 {
        let (x, y) = layout.place();
        assert!((0..200).contains(&x));
        assert!((0..200).contains(&y));
    }
}
