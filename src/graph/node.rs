//! Node implementation for property graph

use super::property::{PropertyMap, PropertyValue};
use super::types::{Label, NodeId};
use serde::{Deserialize, Serialize};

/// A node in the property graph
///
/// Nodes have:
/// - A unique, caller-supplied ID
/// - One label used for typing/grouping
/// - Properties (key-value pairs)
///
/// Nodes are immutable once stored; the store hands them out behind `Arc`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Label for this node
    pub label: Label,

    /// Properties associated with this node
    pub properties: PropertyMap,
}

impl Node {
    /// Create a new node with a label and properties
    pub fn new(id: impl Into<NodeId>, label: impl Into<Label>, properties: PropertyMap) -> Self {
        Node {
            id: id.into(),
            label: label.into(),
            properties,
        }
    }

    /// Check if node has a specific label
    pub fn has_label(&self, label: &str) -> bool {
        self.label.as_str() == label
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// True when `key` is present and equal to `value` in both type and value
    pub fn property_matches(&self, key: &str, value: &PropertyValue) -> bool {
        self.properties.get(key) == Some(value)
    }

    /// Get number of properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
