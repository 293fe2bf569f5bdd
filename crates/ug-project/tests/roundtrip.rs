use ug_graph::{Graph, Link, Node};
use ug_project::{
    DecodingError, ProjectError, from_json_str, from_yaml_str, load, load_json, load_yaml, save,
    save_json, save_yaml, to_json_string,
};

/// Class diagram with a cycle, a parallel add and an orphaned link.
fn class_diagram() -> Graph {
    let mut graph = Graph::new();
    for id in ["Shape", "Circle", "Square", "Canvas"] {
        graph.add_node(Node::new(id));
    }
    graph.add_link(Link::new("Circle", "Shape"));
    graph.add_link(Link::new("Square", "Shape"));
    graph.add_link(Link::new("Canvas", "Shape"));
    graph.add_link(Link::new("Canvas", "Shape"));
    graph.add_link(Link::new("Shape", "Canvas"));
    graph.add_link(Link::new("Canvas", "Palette"));
    graph
}

#[test]
fn roundtrip_json_empty_graph() {
    let graph = Graph::new();
    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("ug_project_roundtrip_empty.json");

    save_json(&path, &graph).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(graph, loaded);
    assert!(loaded.is_empty());
}

#[test]
fn roundtrip_json_class_diagram() {
    let graph = class_diagram();
    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("ug_project_roundtrip_classes.json");

    save_json(&path, &graph).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(loaded.node_count(), 4);
    assert_eq!(loaded.link_count(), 5);
    assert_eq!(graph, loaded);

    // Adjacency comes back exactly, duplicates included.
    assert_eq!(
        loaded.node("Shape").unwrap().incoming_links(),
        ["Circle", "Square", "Canvas", "Canvas"]
    );
    assert_eq!(loaded.orphaned_links().count(), 1);
}

#[test]
fn roundtrip_yaml_class_diagram() {
    let graph = class_diagram();
    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("ug_project_roundtrip_classes.yaml");

    save_yaml(&path, &graph).unwrap();
    let loaded = load_yaml(&path).unwrap();
    assert_eq!(graph, loaded);

    // Extension dispatch reads the same file.
    assert_eq!(load(&path).unwrap(), graph);
}

#[test]
fn save_dispatches_on_extension() {
    let graph = class_diagram();
    let path = std::env::temp_dir().join("ug_project_dispatch.yml");

    save(&path, &graph).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("nodeMap:"));
    assert_eq!(from_yaml_str(&content).unwrap(), graph);
}

#[test]
fn json_uses_documented_keys() {
    let mut graph = Graph::new();
    graph.add_node(Node::new("A"));
    graph.add_node(Node::new("B"));
    graph.add_link(Link::new("A", "B"));

    let value: serde_json::Value = serde_json::from_str(&to_json_string(&graph).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "nodeMap": {
                "A": { "id": "A", "incomingLinks": [], "outgoingLinks": ["B"] },
                "B": { "id": "B", "incomingLinks": ["A"], "outgoingLinks": [] }
            },
            "linkMap": {
                "A": { "B": { "id": "A, B", "sourceNodeId": "A", "targetNodeId": "B" } }
            }
        })
    );
}

#[test]
fn json_missing_link_field_fails_whole_decode() {
    let content = r#"{
        "nodeMap": {
            "A": { "id": "A", "incomingLinks": [], "outgoingLinks": ["B"] },
            "B": { "id": "B", "incomingLinks": ["A"], "outgoingLinks": [] }
        },
        "linkMap": {
            "A": { "B": { "id": "A, B", "sourceNodeId": "A" } }
        }
    }"#;

    match from_json_str(content) {
        Err(ProjectError::Decoding(DecodingError::MissingField { field, path })) => {
            assert_eq!(field, "targetNodeId");
            assert_eq!(path, "linkMap.A.B");
        }
        other => panic!("expected missing field error, got {:?}", other),
    }
}

#[test]
fn json_null_counts_as_missing() {
    let content = r#"{
        "nodeMap": { "A": { "id": null, "incomingLinks": [], "outgoingLinks": [] } },
        "linkMap": {}
    }"#;

    assert!(matches!(
        from_json_str(content),
        Err(ProjectError::Decoding(DecodingError::MissingField { field: "id", .. }))
    ));
}

#[test]
fn json_node_under_wrong_key() {
    let content = r#"{
        "nodeMap": { "A": { "id": "B", "incomingLinks": [], "outgoingLinks": [] } },
        "linkMap": {}
    }"#;

    assert!(matches!(
        from_json_str(content),
        Err(ProjectError::Decoding(DecodingError::Inconsistent(_)))
    ));
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(
        from_json_str("{ not json"),
        Err(ProjectError::Json(_))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("ug_project_does_not_exist.json");
    assert!(matches!(load_json(&path), Err(ProjectError::Io(_))));
}
