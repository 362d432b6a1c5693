//! Core graph store implementation
//!
//! This module implements the property graph data model with:
//! - Nodes with a label and properties
//! - Directed edges with types and properties
//! - Multiple edges between same nodes
//! - In-memory storage with hash-based indices over labels and properties

pub mod edge;
pub mod node;
pub mod property;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use node::Node;
pub use property::{PropertyMap, PropertyValue};
pub use store::{GraphError, GraphResult, GraphStatistics, GraphStore, StoreConfig};
pub use types::{EdgeId, EdgeType, Label, NodeId};
