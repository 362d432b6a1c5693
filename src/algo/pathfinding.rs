//! Pathfinding algorithms
//!
//! Unweighted, directed shortest path by breadth-first search.

use crate::graph::{GraphError, GraphResult, GraphStore, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use tracing::trace;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    /// Node ids from `source` to `target`, both inclusive
    pub path: Vec<NodeId>,
}

impl PathResult {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Follows outgoing edges of every label. Neighbors are expanded in
/// adjacency insertion order and keep the first parent that discovers them,
/// so among equally short paths the one built from earlier-inserted edges
/// wins. The search stops when `target` is dequeued; `source == target`
/// yields the one-element path.
pub fn bfs_shortest_path(store: &GraphStore, source: &str, target: &str) -> GraphResult<PathResult> {
    let source = store.get_node(source)?.id.clone();
    let target = store.get_node(target)?.id.clone();

    let mut queue = VecDeque::new();
    let mut visited = FxHashSet::default();
    let mut parent: FxHashMap<NodeId, NodeId> = FxHashMap::default();

    queue.push_back(source.clone());
    visited.insert(source.clone());

    let mut expanded = 0usize;
    while let Some(current) = queue.pop_front() {
        if current == target {
            // Reconstruct path
            let mut path = vec![current];
            while let Some(prev) = path.last().and_then(|node| parent.get(node)) {
                path.push(prev.clone());
            }
            path.reverse();

            trace!(%source, %target, hops = path.len() - 1, expanded, "bfs path found");
            return Ok(PathResult {
                source,
                target,
                path,
            });
        }

        expanded += 1;
        for neighbor in store.get_neighbors(current.as_str(), "") {
            if visited.insert(neighbor.id.clone()) {
                parent.insert(neighbor.id.clone(), current.clone());
                queue.push_back(neighbor.id.clone());
            }
        }
    }

    trace!(%source, %target, expanded, "bfs frontier exhausted");
    Err(GraphError::PathNotFound {
        start: source,
        end: target,
    })
}
