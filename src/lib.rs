//! Minigraph
//!
//! An embedded, in-memory property graph with label/property indexing, a
//! fluent traversal evaluator and two graph algorithms.
//!
//! # Architecture
//!
//! - [`graph`]: the insert-only [`GraphStore`] owning nodes, edges,
//!   adjacency lists and the property index, guarded by one reader/writer lock
//! - [`index`]: the label -> key -> value index behind `find_nodes`
//! - [`query`]: the [`Traversal`] builder (`V`, `has`, `hasLabel`, `out`,
//!   `in`, `values`)
//! - [`algo`]: breadth-first shortest path and depth-first visitation
//!
//! ## Example Usage
//!
//! ```rust
//! use minigraph::{algo, props, GraphStore, PropertyValue, Traversal};
//!
//! let store = GraphStore::new();
//! store.add_node("1", "person", props! { "name" => "Alice", "age" => 30 }).unwrap();
//! store.add_node("2", "person", props! { "name" => "Bob", "age" => 27 }).unwrap();
//! store.add_node("5", "software", props! { "name" => "Ripple", "lang" => "Go" }).unwrap();
//! store.add_edge("101", "knows", "1", "2", props! {}).unwrap();
//! store.add_edge("106", "created", "2", "5", props! {}).unwrap();
//!
//! // Index lookup
//! let alice = store.find_nodes("person", "name", &PropertyValue::from("Alice"));
//! assert_eq!(alice.len(), 1);
//!
//! // Traversal
//! let known = Traversal::new(&store).v().has("name", "Alice").out("knows").execute();
//! assert_eq!(known[0].id.as_str(), "2");
//!
//! // Shortest path
//! let path = algo::bfs_shortest_path(&store, "1", "5").unwrap();
//! assert_eq!(path.hops(), 2);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod index;
pub mod query;

// Re-export main types for convenience
pub use algo::{bfs_shortest_path, dfs_traversal, PathResult};
pub use graph::{
    Edge, EdgeId, EdgeType, GraphError, GraphResult, GraphStatistics, GraphStore, Label, Node,
    NodeId, PropertyMap, PropertyValue, StoreConfig,
};
pub use query::{Step, Traversal};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
