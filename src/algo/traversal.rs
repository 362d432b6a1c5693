//! Depth-first visitation

use crate::graph::{GraphResult, GraphStore, Node};
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::trace;

/// Iterative pre-order DFS over outgoing edges of every label.
///
/// `visit` runs once per reachable node. Neighbors are pushed in reverse
/// adjacency order so they pop in insertion order, matching a recursive
/// pre-order walk. Cycles are absorbed by the visited set. Returns how many
/// nodes were visited.
pub fn dfs_traversal<F>(store: &GraphStore, start: &str, mut visit: F) -> GraphResult<usize>
where
    F: FnMut(&Node),
{
    let start = store.get_node(start)?;

    let mut visited = FxHashSet::default();
    let mut stack: Vec<Arc<Node>> = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.id.clone()) {
            continue;
        }
        visit(&current);

        let neighbors = store.get_neighbors(current.id.as_str(), "");
        stack.extend(neighbors.into_iter().rev());
    }

    trace!(visited = visited.len(), "dfs complete");
    Ok(visited.len())
}
