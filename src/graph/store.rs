//! In-memory graph storage implementation
//!
//! All node, edge, adjacency and index state lives behind a single
//! reader/writer lock. Inserts hold the write lock across validation and
//! mutation, so a reader never sees a node without its index entries or an
//! edge without its adjacency entries. Reads hold the shared lock for one
//! call only; a multi-call traversal is therefore not a snapshot.

use super::edge::Edge;
use super::node::Node;
use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, EdgeType, Label, NodeId};
use crate::index::PropertyIndex;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {0} already exists")]
    NodeAlreadyExists(NodeId),

    #[error("Edge {0} already exists")]
    EdgeAlreadyExists(EdgeId),

    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("Path not found between {start} and {end}")]
    PathNotFound { start: NodeId, end: NodeId },
}

impl GraphError {
    /// True for either duplicate-id rejection
    pub fn is_duplicate_id(&self) -> bool {
        matches!(
            self,
            GraphError::NodeAlreadyExists(_) | GraphError::EdgeAlreadyExists(_)
        )
    }
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Construction-time sizing for a [`GraphStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Nodes to reserve space for up front
    pub node_capacity: usize,
    /// Edges to reserve space for up front
    pub edge_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            node_capacity: 1024,
            edge_capacity: 4096,
        }
    }
}

/// Point-in-time counts over the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    pub label_counts: HashMap<Label, usize>,
    pub edge_type_counts: HashMap<EdgeType, usize>,
    /// Distinct (label, key, value) triples in the property index
    pub index_entries: usize,
}

#[derive(Debug)]
struct GraphInner {
    /// Node arena, insertion ordered
    nodes: IndexMap<NodeId, Arc<Node>>,

    /// Edge arena, insertion ordered
    edges: IndexMap<EdgeId, Arc<Edge>>,

    /// Outgoing edges for each node (adjacency list)
    outgoing: HashMap<NodeId, Vec<EdgeId>>,

    /// Incoming edges for each node (adjacency list)
    incoming: HashMap<NodeId, Vec<EdgeId>>,

    /// Label index for fast lookups
    label_index: HashMap<Label, Vec<NodeId>>,

    /// Label -> key -> value -> nodes
    property_index: PropertyIndex,
}

impl GraphInner {
    fn with_config(config: StoreConfig) -> Self {
        GraphInner {
            nodes: IndexMap::with_capacity(config.node_capacity),
            edges: IndexMap::with_capacity(config.edge_capacity),
            outgoing: HashMap::with_capacity(config.node_capacity),
            incoming: HashMap::with_capacity(config.node_capacity),
            label_index: HashMap::new(),
            property_index: PropertyIndex::new(),
        }
    }

    fn edges_of<'a>(
        &'a self,
        adjacency: &'a HashMap<NodeId, Vec<EdgeId>>,
        node_id: &str,
    ) -> impl Iterator<Item = &'a Arc<Edge>> + 'a {
        adjacency
            .get(node_id)
            .into_iter()
            .flatten()
            .filter_map(move |edge_id| self.edges.get(edge_id))
    }
}

/// In-memory, insert-only property graph
///
/// Uses hash maps for O(1) lookup performance:
/// - nodes: NodeId -> Node
/// - edges: EdgeId -> Edge
/// - outgoing: NodeId -> Vec<EdgeId> (adjacency list for outgoing edges)
/// - incoming: NodeId -> Vec<EdgeId> (adjacency list for incoming edges)
/// - property index: Label -> key -> value -> Vec<NodeId>
///
/// Every method takes `&self`; share the store across threads with `Arc`.
#[derive(Debug)]
pub struct GraphStore {
    inner: RwLock<GraphInner>,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create a new empty graph store with explicit sizing
    pub fn with_config(config: StoreConfig) -> Self {
        GraphStore {
            inner: RwLock::new(GraphInner::with_config(config)),
        }
    }

    // Inserts validate before touching any map, so state behind a poisoned
    // lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, GraphInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GraphInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a node and index every one of its properties.
    ///
    /// Fails with [`GraphError::NodeAlreadyExists`] if `id` is taken; the
    /// store is left unchanged in that case.
    pub fn add_node(
        &self,
        id: impl Into<NodeId>,
        label: impl Into<Label>,
        properties: PropertyMap,
    ) -> GraphResult<Arc<Node>> {
        let id = id.into();
        let mut inner = self.write();

        if inner.nodes.contains_key(&id) {
            return Err(GraphError::NodeAlreadyExists(id));
        }

        let node = Arc::new(Node::new(id.clone(), label, properties));

        inner
            .property_index
            .insert_all(&node.label, &node.properties, &id);
        inner
            .label_index
            .entry(node.label.clone())
            .or_default()
            .push(id.clone());
        inner.outgoing.insert(id.clone(), Vec::new());
        inner.incoming.insert(id.clone(), Vec::new());
        inner.nodes.insert(id, Arc::clone(&node));

        debug!(
            node = %node.id,
            label = %node.label,
            properties = node.property_count(),
            "node added"
        );
        Ok(node)
    }

    /// Insert a directed edge between two existing nodes.
    ///
    /// Checks run before any mutation: a duplicate `id` fails with
    /// [`GraphError::EdgeAlreadyExists`], a missing endpoint with
    /// [`GraphError::NodeNotFound`].
    pub fn add_edge(
        &self,
        id: impl Into<EdgeId>,
        label: impl Into<EdgeType>,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        properties: PropertyMap,
    ) -> GraphResult<Arc<Edge>> {
        let id = id.into();
        let from = from.into();
        let to = to.into();
        let mut inner = self.write();

        if inner.edges.contains_key(&id) {
            return Err(GraphError::EdgeAlreadyExists(id));
        }
        if !inner.nodes.contains_key(&from) {
            return Err(GraphError::NodeNotFound(from));
        }
        if !inner.nodes.contains_key(&to) {
            return Err(GraphError::NodeNotFound(to));
        }

        let edge = Arc::new(Edge::new(id.clone(), label, from, to, properties));

        inner
            .outgoing
            .entry(edge.source.clone())
            .or_default()
            .push(id.clone());
        inner
            .incoming
            .entry(edge.target.clone())
            .or_default()
            .push(id.clone());
        inner.edges.insert(id, Arc::clone(&edge));

        debug!(
            edge = %edge.id,
            label = %edge.edge_type,
            source = %edge.source,
            target = %edge.target,
            "edge added"
        );
        Ok(edge)
    }

    /// Get a node by ID
    pub fn get_node(&self, id: &str) -> GraphResult<Arc<Node>> {
        self.read()
            .nodes
            .get(id)
            .cloned()
            .ok_or_else(|| GraphError::NodeNotFound(NodeId::new(id)))
    }

    /// Get an edge by ID
    pub fn get_edge(&self, id: &str) -> GraphResult<Arc<Edge>> {
        self.read()
            .edges
            .get(id)
            .cloned()
            .ok_or_else(|| GraphError::EdgeNotFound(EdgeId::new(id)))
    }

    /// Check if a node exists
    pub fn has_node(&self, id: &str) -> bool {
        self.read().nodes.contains_key(id)
    }

    /// Check if an edge exists
    pub fn has_edge(&self, id: &str) -> bool {
        self.read().edges.contains_key(id)
    }

    /// Nodes with `label` whose `key` property equals `value` (type and value).
    ///
    /// Answered from the property index alone. There is no fallback scan:
    /// every property of every node is indexed when the node is inserted and
    /// nodes never change afterwards.
    pub fn find_nodes(&self, label: &str, key: &str, value: &PropertyValue) -> Vec<Arc<Node>> {
        let inner = self.read();
        inner
            .property_index
            .get(label, key, value)
            .iter()
            .filter_map(|id| inner.nodes.get(id).cloned())
            .collect()
    }

    /// Get all nodes in the graph.
    ///
    /// Currently insertion order; callers must not depend on it.
    pub fn get_all_nodes(&self) -> Vec<Arc<Node>> {
        self.read().nodes.values().cloned().collect()
    }

    /// Get all nodes with a specific label, in insertion order
    pub fn get_nodes_by_label(&self, label: &str) -> Vec<Arc<Node>> {
        let inner = self.read();
        inner
            .label_index
            .get(label)
            .map(|node_ids| {
                node_ids
                    .iter()
                    .filter_map(|id| inner.nodes.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Targets of `node_id`'s outgoing edges, in edge insertion order.
    ///
    /// An empty `edge_label` matches every edge. Unknown nodes have no
    /// neighbors.
    pub fn get_neighbors(&self, node_id: &str, edge_label: &str) -> Vec<Arc<Node>> {
        let inner = self.read();
        inner
            .edges_of(&inner.outgoing, node_id)
            .filter(|edge| edge.matches_type(edge_label))
            .filter_map(|edge| inner.nodes.get(&edge.target).cloned())
            .collect()
    }

    /// Sources of `node_id`'s incoming edges, in edge insertion order
    pub fn get_incoming_neighbors(&self, node_id: &str, edge_label: &str) -> Vec<Arc<Node>> {
        let inner = self.read();
        inner
            .edges_of(&inner.incoming, node_id)
            .filter(|edge| edge.matches_type(edge_label))
            .filter_map(|edge| inner.nodes.get(&edge.source).cloned())
            .collect()
    }

    /// Get all outgoing edges from a node
    pub fn get_outgoing_edges(&self, node_id: &str) -> Vec<Arc<Edge>> {
        let inner = self.read();
        inner.edges_of(&inner.outgoing, node_id).cloned().collect()
    }

    /// Get all incoming edges to a node
    pub fn get_incoming_edges(&self, node_id: &str) -> Vec<Arc<Edge>> {
        let inner = self.read();
        inner.edges_of(&inner.incoming, node_id).cloned().collect()
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.read().nodes.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.read().edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().nodes.is_empty()
    }

    /// Counts by label and edge type, taken under one read lock
    pub fn statistics(&self) -> GraphStatistics {
        let inner = self.read();
        let label_counts = inner
            .label_index
            .iter()
            .map(|(label, ids)| (label.clone(), ids.len()))
            .collect();

        let mut edge_type_counts: HashMap<EdgeType, usize> = HashMap::new();
        for edge in inner.edges.values() {
            *edge_type_counts.entry(edge.edge_type.clone()).or_insert(0) += 1;
        }

        GraphStatistics {
            node_count: inner.nodes.len(),
            edge_count: inner.edges.len(),
            label_counts,
            edge_type_counts,
            index_entries: inner.property_index.entry_count(),
        }
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
