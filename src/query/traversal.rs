//! Fluent traversal builder and its evaluator
//!
//! ```
//! use minigraph::{props, GraphStore, PropertyValue, Traversal};
//!
//! let store = GraphStore::new();
//! store.add_node("1", "person", props! { "name" => "Alice" }).unwrap();
//! store.add_node("2", "person", props! { "name" => "Bob" }).unwrap();
//! store.add_edge("101", "knows", "1", "2", props! {}).unwrap();
//!
//! let names = Traversal::new(&store)
//!     .v()
//!     .has("name", "Alice")
//!     .out("knows")
//!     .values("name");
//! assert_eq!(names, vec![PropertyValue::from("Bob")]);
//! ```

use super::step::Step;
use crate::graph::{GraphStore, Label, Node, NodeId, PropertyValue};
use std::sync::Arc;
use tracing::{debug, trace};

/// Stateful traversal over a borrowed [`GraphStore`]
///
/// Each chaining method records a [`Step`], applies it to the current bag
/// right away and returns the same handle. Results are bags: `out`/`in_`
/// keep one entry per path, so a node reached along two edges appears
/// twice. Deduplicate downstream if needed.
///
/// `v` snapshots the store when called. Later steps read the store again,
/// so inserts made in between are visible to them; the bag already held
/// never changes on its own.
#[derive(Debug, Clone)]
pub struct Traversal<'g> {
    store: &'g GraphStore,
    steps: Vec<Step>,
    current: Vec<Arc<Node>>,
}

impl<'g> Traversal<'g> {
    /// Start an empty traversal. Until `v`/`v_ids` is called it yields nothing.
    pub fn new(store: &'g GraphStore) -> Self {
        Self {
            store,
            steps: Vec::new(),
            current: Vec::new(),
        }
    }

    fn push(&mut self, step: Step) -> &mut Self {
        let bag = std::mem::take(&mut self.current);
        self.current = apply(self.store, &step, bag);
        trace!(step = %step, bag = self.current.len(), "step applied");
        self.steps.push(step);
        self
    }

    /// Start from every node in the store
    pub fn v(&mut self) -> &mut Self {
        self.push(Step::ScanAll)
    }

    /// Start from specific nodes
    pub fn v_ids<I, T>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        self.push(Step::ScanIds(ids.into_iter().map(Into::into).collect()))
    }

    /// Keep nodes whose `key` property equals `value` in type and value
    pub fn has(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> &mut Self {
        self.push(Step::FilterProperty {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Keep nodes with this label
    pub fn has_label(&mut self, label: impl Into<Label>) -> &mut Self {
        self.push(Step::FilterLabel(label.into()))
    }

    /// Follow outgoing edges; an empty label follows all of them
    pub fn out(&mut self, edge_label: &str) -> &mut Self {
        self.push(Step::ExpandOut(Step::edge_filter(edge_label)))
    }

    /// Follow incoming edges back to their sources
    pub fn in_(&mut self, edge_label: &str) -> &mut Self {
        self.push(Step::ExpandIn(Step::edge_filter(edge_label)))
    }

    /// The steps applied so far
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The current bag of nodes, as-is
    pub fn execute(&self) -> Vec<Arc<Node>> {
        debug!(
            query = %self,
            results = self.current.len(),
            "traversal executed"
        );
        self.current.clone()
    }

    /// Project `key` over the current bag; nodes without the key are skipped
    pub fn values(&self, key: &str) -> Vec<PropertyValue> {
        self.current
            .iter()
            .filter_map(|node| node.get_property(key).cloned())
            .collect()
    }

    /// Size of the current bag
    pub fn count(&self) -> usize {
        self.current.len()
    }
}

impl std::fmt::Display for Traversal<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "g")?;
        for step in &self.steps {
            write!(f, ".{}", step)?;
        }
        Ok(())
    }
}

/// Apply one step to `current` and return the next bag
///
/// Expansion order is per source node in bag order, and within a node in
/// adjacency insertion order; the per-node lists are concatenated.
pub fn apply(store: &GraphStore, step: &Step, mut current: Vec<Arc<Node>>) -> Vec<Arc<Node>> {
    match step {
        Step::ScanAll => store.get_all_nodes(),
        Step::ScanIds(ids) => ids
            .iter()
            .filter_map(|id| store.get_node(id.as_str()).ok())
            .collect(),
        Step::FilterProperty { key, value } => {
            current.retain(|node| node.property_matches(key, value));
            current
        }
        Step::FilterLabel(label) => {
            current.retain(|node| node.label == *label);
            current
        }
        Step::ExpandOut(edge_type) => {
            let label = edge_type.as_ref().map(|t| t.as_str()).unwrap_or("");
            current
                .iter()
                .flat_map(|node| store.get_neighbors(node.id.as_str(), label))
                .collect()
        }
        Step::ExpandIn(edge_type) => {
            let label = edge_type.as_ref().map(|t| t.as_str()).unwrap_or("");
            current
                .iter()
                .flat_map(|node| store.get_incoming_neighbors(node.id.as_str(), label))
                .collect()
        }
    }
}

/// Interpret `steps` against `store` from an empty bag
pub fn evaluate(store: &GraphStore, steps: &[Step]) -> Vec<Arc<Node>> {
    steps
        .iter()
        .fold(Vec::new(), |current, step| apply(store, step, current))
}
