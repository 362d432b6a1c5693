//! Property indexing module
//!
//! Provides the exact-match index behind `GraphStore::find_nodes`.

pub mod property_index;

pub use property_index::PropertyIndex;
