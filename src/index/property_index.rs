//! Hash based property index for exact-match lookups
//!
//! Layout is label -> property key -> property value -> node ids. The id
//! lists keep insertion order. Entries are only ever added: nodes are
//! immutable, so an entry written at insertion time stays accurate for the
//! life of the store.
//!
//! Values are keyed through `ValueKey`, which hashes consistently with
//! `PropertyValue` equality: both float zeros share one key and `NaN`, which
//! equals nothing, is never indexed.

use crate::graph::{Label, NodeId, PropertyMap, PropertyValue};
use std::collections::HashMap;

type ValueIndex = HashMap<ValueKey, Vec<NodeId>>;

/// Hashable form of a [`PropertyValue`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ValueKey {
    String(String),
    Integer(i64),
    Float(u64),
    Boolean(bool),
    Null,
}

impl ValueKey {
    /// `None` for values that can never compare equal
    fn of(value: &PropertyValue) -> Option<Self> {
        let key = match value {
            PropertyValue::String(s) => ValueKey::String(s.clone()),
            PropertyValue::Integer(i) => ValueKey::Integer(*i),
            PropertyValue::Float(f) if f.is_nan() => return None,
            PropertyValue::Float(f) if *f == 0.0 => ValueKey::Float(0f64.to_bits()),
            PropertyValue::Float(f) => ValueKey::Float(f.to_bits()),
            PropertyValue::Boolean(b) => ValueKey::Boolean(*b),
            PropertyValue::Null => ValueKey::Null,
        };
        Some(key)
    }
}

/// Index over every (label, key, value) triple of every stored node
#[derive(Debug, Clone, Default)]
pub struct PropertyIndex {
    index: HashMap<Label, HashMap<String, ValueIndex>>,
}

impl PropertyIndex {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
        }
    }

    /// Record a single (label, key, value) triple for `node_id`. `NaN`
    /// values are skipped since no lookup can match them.
    pub fn insert(&mut self, label: &Label, key: &str, value: &PropertyValue, node_id: NodeId) {
        let Some(value) = ValueKey::of(value) else {
            return;
        };
        self.index
            .entry(label.clone())
            .or_default()
            .entry(key.to_string())
            .or_default()
            .entry(value)
            .or_default()
            .push(node_id);
    }

    /// Record every property of a freshly inserted node
    pub fn insert_all(&mut self, label: &Label, properties: &PropertyMap, node_id: &NodeId) {
        for (key, value) in properties {
            self.insert(label, key, value, node_id.clone());
        }
    }

    /// Node ids holding exactly `value` under `key` for `label`, in insertion order
    pub fn get(&self, label: &str, key: &str, value: &PropertyValue) -> &[NodeId] {
        let Some(value) = ValueKey::of(value) else {
            return &[];
        };
        self.index
            .get(label)
            .and_then(|keys| keys.get(key))
            .and_then(|values| values.get(&value))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct (label, key, value) triples
    pub fn entry_count(&self) -> usize {
        self.index
            .values()
            .flat_map(|keys| keys.values())
            .map(|values| values.len())
            .sum()
    }
}
