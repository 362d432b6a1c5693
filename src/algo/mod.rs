//! Graph algorithms module
//!
//! Both algorithms walk the store's outgoing adjacency through
//! `GraphStore::get_neighbors`, one read call per expanded node.

pub mod pathfinding;
pub mod traversal;

pub use pathfinding::{bfs_shortest_path, PathResult};
pub use traversal::dfs_traversal;
