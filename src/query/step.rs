//! Traversal step descriptors
//!
//! A traversal is an ordered list of [`Step`]s. Describing the chain as data
//! keeps it independent of any store; [`apply`](super::traversal::apply)
//! interprets one step at a time.

use crate::graph::{EdgeType, Label, NodeId, PropertyValue};
use std::fmt;

/// One operation in a traversal chain
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Replace the current bag with every node in the store
    ScanAll,

    /// Replace the current bag with the listed nodes; unknown ids are skipped
    ScanIds(Vec<NodeId>),

    /// Keep nodes whose property `key` equals `value` in type and value
    FilterProperty { key: String, value: PropertyValue },

    /// Keep nodes carrying this label
    FilterLabel(Label),

    /// Replace each node with the targets of its outgoing edges.
    /// `None` follows every edge type.
    ExpandOut(Option<EdgeType>),

    /// Replace each node with the sources of its incoming edges
    ExpandIn(Option<EdgeType>),
}

impl Step {
    /// An empty label means "any edge"
    pub(crate) fn edge_filter(edge_label: &str) -> Option<EdgeType> {
        if edge_label.is_empty() {
            None
        } else {
            Some(EdgeType::new(edge_label))
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn edge(label: &Option<EdgeType>) -> &str {
            label.as_ref().map(EdgeType::as_str).unwrap_or("")
        }

        match self {
            Step::ScanAll => write!(f, "V()"),
            Step::ScanIds(ids) => {
                write!(f, "V(")?;
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\"", id)?;
                }
                write!(f, ")")
            }
            Step::FilterProperty { key, value } => write!(f, "has(\"{}\", {})", key, value),
            Step::FilterLabel(label) => write!(f, "hasLabel(\"{}\")", label),
            Step::ExpandOut(label) => write!(f, "out(\"{}\")", edge(label)),
            Step::ExpandIn(label) => write!(f, "in(\"{}\")", edge(label)),
        }
    }
}
