//! Traversal query module
//!
//! A small Gremlin-flavoured builder (`V`, `has`, `hasLabel`, `out`, `in`,
//! `values`) recorded as [`Step`] descriptors. Each step is applied to the
//! traversal's bag as it is added, via [`apply`]; [`evaluate`] replays a
//! whole chain against a [`GraphStore`](crate::graph::GraphStore).

pub mod step;
pub mod traversal;

// Re-export main types
pub use step::Step;
pub use traversal::{apply, evaluate, Traversal};
