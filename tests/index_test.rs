use minigraph::graph::{GraphError, GraphStore, NodeId, PropertyMap, PropertyValue};
use minigraph::props;
use minigraph::Traversal;

fn people_store() -> GraphStore {
    let store = GraphStore::new();
    store.add_node("1", "person", props! { "name" => "Alice", "age" => 30 }).unwrap();
    store.add_node("2", "person", props! { "name" => "Bob", "age" => 27 }).unwrap();
    store.add_node("3", "person", props! { "name" => "Charlie", "age" => 35 }).unwrap();
    store.add_node("4", "person", props! { "name" => "David", "age" => 25 }).unwrap();
    store.add_node("5", "software", props! { "name" => "Ripple", "lang" => "Go" }).unwrap();
    store.add_node("6", "software", props! { "name" => "Lop", "lang" => "Java" }).unwrap();
    store
}

#[test]
fn test_property_index_usage() {
    let store = GraphStore::new();

    for i in 0..100 {
        store
            .add_node(format!("p{}", i), "Person", props! { "id" => i as i64 })
            .unwrap();
    }

    let result = store.find_nodes("Person", "id", &PropertyValue::Integer(50));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, NodeId::new("p50"));
    assert_eq!(result[0].get_property("id").unwrap().as_integer(), Some(50));
}

#[test]
fn test_index_lookup_by_name() {
    let store = people_store();
    let nodes = store.find_nodes("person", "name", &"Alice".into());
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].id.as_str(), "1");
}

#[test]
fn test_index_returns_matches_in_insertion_order() {
    let store = GraphStore::new();
    for id in ["c", "a", "b"] {
        store.add_node(id, "city", props! { "country" => "NL" }).unwrap();
    }
    let ids: Vec<_> = store
        .find_nodes("city", "country", &"NL".into())
        .iter()
        .map(|n| n.id.to_string())
        .collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn test_index_is_label_scoped() {
    let store = people_store();
    // "name" exists under both labels, but the lookup never crosses them
    assert!(store.find_nodes("person", "name", &"Ripple".into()).is_empty());
    assert_eq!(store.find_nodes("software", "name", &"Ripple".into()).len(), 1);
}

#[test]
fn test_index_type_strict() {
    let store = people_store();
    assert_eq!(store.find_nodes("person", "age", &PropertyValue::Integer(30)).len(), 1);
    assert!(store.find_nodes("person", "age", &PropertyValue::Float(30.0)).is_empty());
    assert!(store.find_nodes("person", "age", &PropertyValue::from("30")).is_empty());
}

#[test]
fn test_float_lookups_use_numeric_equality() {
    let store = GraphStore::new();
    store.add_node("origin", "pt", props! { "x" => 0.0 }).unwrap();
    store.add_node("void", "pt", props! { "x" => f64::NAN }).unwrap();

    let hits = store.find_nodes("pt", "x", &PropertyValue::Float(-0.0));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id.as_str(), "origin");
    assert_eq!(Traversal::new(&store).v().has("x", -0.0).count(), 1);

    // NaN equals nothing, so neither path finds the node holding it
    assert!(store.find_nodes("pt", "x", &PropertyValue::Float(f64::NAN)).is_empty());
    assert_eq!(Traversal::new(&store).v().has("x", f64::NAN).count(), 0);
    assert_eq!(store.node_count(), 2);
}

#[test]
fn test_null_and_boolean_values_are_indexed() {
    let store = GraphStore::new();
    store
        .add_node("1", "task", props! { "done" => true, "owner" => PropertyValue::Null })
        .unwrap();
    store.add_node("2", "task", props! { "done" => false }).unwrap();

    assert_eq!(store.find_nodes("task", "done", &true.into()).len(), 1);
    assert_eq!(store.find_nodes("task", "owner", &PropertyValue::Null).len(), 1);
    assert!(store.find_nodes("task", "owner", &"nobody".into()).is_empty());
}

#[test]
fn test_rejected_duplicate_leaves_index_unchanged() {
    let store = people_store();
    let before = store.statistics();

    let err = store
        .add_node("1", "person", props! { "name" => "Mallory" })
        .unwrap_err();
    assert_eq!(err, GraphError::NodeAlreadyExists(NodeId::new("1")));

    assert_eq!(store.statistics(), before);
    assert!(store.find_nodes("person", "name", &"Mallory".into()).is_empty());
    assert_eq!(store.find_nodes("person", "name", &"Alice".into()).len(), 1);
}

#[test]
fn test_rejected_edge_leaves_adjacency_unchanged() {
    let store = people_store();
    store.add_edge("101", "knows", "1", "2", PropertyMap::new()).unwrap();
    let before = store.statistics();

    let err = store
        .add_edge("102", "knows", "1", "ghost", PropertyMap::new())
        .unwrap_err();
    assert_eq!(err, GraphError::NodeNotFound(NodeId::new("ghost")));

    assert_eq!(store.statistics(), before);
    assert_eq!(store.get_outgoing_edges("1").len(), 1);
    assert!(!store.has_edge("102"));
}
