use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graphs::forward::Forward;
use crate::graphs::visited::Visited;

/// Vertices along a shortest path from `from` to `to`, both included.
///
/// Runs a breadth-first search that records the first discoverer of every
/// vertex and stops as soon as `to` is discovered. Among several shortest
/// paths the one returned is the first found when successors are scanned
/// in stored order and the queue is served first in, first out.
///
/// Returns `None` when either vertex is absent or `to` is unreachable.
/// When `from == to` the path is the single vertex.
pub fn shortest_path<'g, G>(
    graph: &'g G,
    from: &G::Vertex,
    to: &G::Vertex,
) -> Option<Vec<&'g G::Vertex>>
where
    G: Forward,
{
    let from = graph.get_vertex(from)?;
    let to = graph.get_vertex(to)?;

    if from == to {
        return Some(vec![from]);
    }

    // The source is visited but never gets a predecessor.
    let mut visited: FxHashSet<&G::Vertex> = FxHashSet::default();
    let mut predecessors: FxHashMap<&G::Vertex, &G::Vertex> = FxHashMap::default();
    let mut queue = VecDeque::from([from]);
    visited.visit(from);

    while let Some(current) = queue.pop_front() {
        for successor in graph.successors(current) {
            if !visited.visit(successor) {
                continue;
            }

            predecessors.insert(successor, current);
            if successor == to {
                return Some(walk_back(&predecessors, to));
            }

            queue.push_back(successor);
        }
    }

    None
}

/// Follows predecessors from `to` back to the search source, then reverses.
fn walk_back<'g, V>(predecessors: &FxHashMap<&'g V, &'g V>, to: &'g V) -> Vec<&'g V>
where
    V: Eq + Hash,
{
    let mut path = vec![to];
    let mut current = to;

    while let Some(&previous) = predecessors.get(current) {
        path.push(previous);
        current = previous;
    }

    path.reverse();
    path
}
