use std::collections::hash_map::{self, Entry};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::slice;

use rustc_hash::{FxBuildHasher, FxHashMap};
use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graphs::bfs;
use crate::graphs::directed::Directed;
use crate::graphs::distance::Distance;
use crate::graphs::edges::{InsertEdge, ReadEdges, RemoveEdge};
use crate::graphs::paths;
use crate::graphs::vertices::Vertices;

/// A mutable directed graph over hashable vertex values.
///
/// Every vertex maps to the ordered list of its direct successors.
/// Successor lists keep insertion order and never hold duplicates, so a
/// pair of vertices is connected by at most one edge. Every successor is
/// itself a vertex of the graph: adding an edge adds its endpoints, and
/// removing a vertex removes every edge pointing at it.
///
/// There is no stored edge counter, the edge count is the sum of the
/// successor list lengths.
///
/// # Concurrency
///
/// The graph has no internal locking and no operation is atomic across
/// several structural changes. Mutation takes `&mut self`, so iterators
/// returned by queries can never observe a concurrent mutation. To share a
/// graph between threads, wrap the whole structure in a lock such as
/// `std::sync::RwLock<DirectedGraph<V>>`.
///
/// # Example
///
/// ```
/// use hashgraph::{DirectedGraph, Distance};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge("A", "B");
/// graph.add_edge("B", "C");
///
/// assert!(graph.has_path(&"A", &"C"));
/// assert_eq!(graph.path_length(&"A", &"C"), Distance::new(2));
/// assert_eq!(graph.get_path(&"A", &"C"), vec!["A", "B", "C"]);
/// ```
#[derive(Clone)]
pub struct DirectedGraph<V> {
    adjacency: FxHashMap<V, Vec<V>>,
}

impl<V> Default for DirectedGraph<V> {
    /// Empty graph with no vertices and no edges.
    fn default() -> Self {
        Self {
            adjacency: FxHashMap::default(),
        }
    }
}

impl<V> DirectedGraph<V>
where
    V: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// True when the graph has no vertices, and therefore no edges.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// True when there is an edge from `from` to `to`.
    ///
    /// An absent `from` has no edges.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacent_to(from).any(|successor| successor == to)
    }

    /// Direct successors of `from` in the order their edges were added.
    ///
    /// Empty when `from` is absent or has no outgoing edges. The iterator
    /// can be cloned to restart it.
    pub fn adjacent_to(&self, from: &V) -> slice::Iter<'_, V> {
        self.adjacency
            .get(from)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
    }

    /// All vertices, in an order that is stable while the graph is not mutated.
    pub fn vertices(&self) -> hash_map::Keys<'_, V, Vec<V>> {
        self.adjacency.keys()
    }

    /// All edges as `(from, to)` pairs.
    pub fn edges(&self) -> DirectedEdges<'_, V> {
        DirectedEdges::new(self.adjacency.iter())
    }
}

/// Operations that log vertices or store them twice.
impl<V> DirectedGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    /// Adds a vertex without edges.
    ///
    /// Returns false, and leaves the graph untouched, when the vertex
    /// already exists.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        match self.adjacency.entry(vertex) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                trace!(vertex = ?entry.key(), "vertex added");
                entry.insert(Vec::new());
                true
            }
        }
    }

    /// Adds a directed edge from `from` to `to`.
    ///
    /// Missing endpoints are added as vertices first. Returns false when the
    /// edge already exists.
    pub fn add_edge(&mut self, from: V, to: V) -> bool {
        if self.has_edge(&from, &to) {
            return false;
        }

        trace!(?from, ?to, "edge added");
        self.add_vertex(to.clone());
        self.adjacency.entry(from).or_default().push(to);
        true
    }

    /// Removes a vertex together with every edge from or to it.
    ///
    /// Returns false when the vertex was not in the graph.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(outgoing) = self.adjacency.remove(vertex) else {
            return false;
        };

        let mut incoming = 0;
        for successors in self.adjacency.values_mut() {
            let before = successors.len();
            successors.retain(|successor| successor != vertex);
            incoming += before - successors.len();
        }

        debug!(
            ?vertex,
            outgoing = outgoing.len(),
            incoming,
            "vertex removed"
        );
        true
    }

    /// Removes the edge from `from` to `to`, keeping both vertices.
    ///
    /// Returns false when there was no such edge.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let Some(successors) = self.adjacency.get_mut(from) else {
            return false;
        };

        match successors.iter().position(|successor| successor == to) {
            Some(index) => {
                successors.remove(index);
                trace!(?from, ?to, "edge removed");
                true
            }
            None => false,
        }
    }

    /// Number of edges leaving `vertex`.
    ///
    /// Fails with [`GraphError::VertexNotFound`] when the vertex is absent.
    pub fn degree(&self, vertex: &V) -> Result<usize> {
        self.adjacency
            .get(vertex)
            .map(Vec::len)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{vertex:?}")))
    }

    /// True when `to` is reachable from `from`.
    ///
    /// Both vertices must be in the graph. A vertex always reaches itself.
    pub fn has_path(&self, from: &V, to: &V) -> bool {
        let found = bfs::has_path(self, from, to);
        debug!(?from, ?to, found, "reachability search");
        found
    }

    /// Number of edges on a shortest path from `from` to `to`.
    ///
    /// [`Distance::ZERO`] when `from == to`, [`Distance::INFINITY`] when
    /// there is no path or either vertex is absent.
    pub fn path_length(&self, from: &V, to: &V) -> Distance {
        let distance = bfs::path_length(self, from, to);
        debug!(?from, ?to, %distance, "shortest path length");
        distance
    }

    /// Vertices along a shortest path from `from` to `to`, both included.
    ///
    /// Empty when `from == to`, when there is no path, or when either vertex
    /// is absent. Ties between equally short paths go to the path found
    /// first by a breadth-first search scanning successors in stored order.
    pub fn get_path(&self, from: &V, to: &V) -> Vec<V> {
        if from == to {
            return Vec::new();
        }

        let path: Vec<V> = paths::shortest_path(self, from, to)
            .map(|path| path.into_iter().cloned().collect())
            .unwrap_or_default();

        debug!(?from, ?to, vertices = path.len(), "shortest path");
        path
    }
}

impl<V> Vertices for DirectedGraph<V>
where
    V: Eq + Hash,
{
    type Vertex = V;

    type Vertices<'a>
        = hash_map::Keys<'a, V, Vec<V>>
    where
        Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        self.adjacency.keys()
    }

    fn get_vertex(&self, vertex: &V) -> Option<&V> {
        self.adjacency.get_key_value(vertex).map(|(key, _)| key)
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }
}

impl<V> ReadEdges for DirectedGraph<V>
where
    V: Eq + Hash,
{
    type Edges<'a>
        = DirectedEdges<'a, V>
    where
        Self: 'a;

    fn edges(&self) -> Self::Edges<'_> {
        DirectedEdges::new(self.adjacency.iter())
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl<V> Directed for DirectedGraph<V>
where
    V: Eq + Hash,
{
    type Outgoing<'a>
        = slice::Iter<'a, V>
    where
        Self: 'a;

    fn outgoing(&self, source: &V) -> Self::Outgoing<'_> {
        self.adjacency
            .get(source)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
    }

    fn outgoing_degree(&self, vertex: &V) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }
}

impl<V> InsertEdge for DirectedGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn insert_edge(&mut self, (from, to): (V, V)) -> bool {
        self.add_edge(from, to)
    }
}

impl<V> RemoveEdge for DirectedGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn remove_edge(&mut self, (from, to): (&V, &V)) -> bool {
        DirectedGraph::remove_edge(self, from, to)
    }
}

/// Two graphs are equal when they have the same vertices and every vertex
/// has the same set of successors, in any order.
impl<V> PartialEq for DirectedGraph<V>
where
    V: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.adjacency.len() == other.adjacency.len()
            && self.adjacency.iter().all(|(vertex, successors)| {
                other.adjacency.get(vertex).is_some_and(|theirs| {
                    successors.len() == theirs.len()
                        && successors.iter().all(|successor| theirs.contains(successor))
                })
            })
    }
}

impl<V> Eq for DirectedGraph<V> where V: Eq + Hash {}

/// One line per vertex: the vertex, `": "`, then its successors separated
/// by `", "`. A vertex without successors renders as `"<vertex>: "`.
///
/// ```text
/// A: A, B
/// B:
/// C: A, B
/// ```
impl<V> Display for DirectedGraph<V>
where
    V: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, successors) in &self.adjacency {
            write!(f, "{vertex}: ")?;
            for (index, successor) in successors.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{successor}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<V> Debug for DirectedGraph<V>
where
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.adjacency.iter()).finish()
    }
}

impl<V> From<Vec<(V, V)>> for DirectedGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    /// Build a graph from a list of directed edges.
    ///
    /// Repeated edges collapse into one.
    fn from(edges: Vec<(V, V)>) -> Self {
        let mut graph = Self::with_capacity(edges.len());
        graph.extend(edges);
        graph
    }
}

impl<V> FromIterator<(V, V)> for DirectedGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn from_iter<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}

impl<V> Extend<(V, V)> for DirectedGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, edges: I) {
        for endpoints in edges {
            self.insert_edge(endpoints);
        }
    }
}

/// Iterator over the edges of a [`DirectedGraph`].
///
/// The iterator yields pairs `(source, destination)`, grouped by source.
pub struct DirectedEdges<'a, V> {
    sources: hash_map::Iter<'a, V, Vec<V>>,
    /// Source currently being drained and its remaining successors.
    current: Option<(&'a V, slice::Iter<'a, V>)>,
}

impl<'a, V> DirectedEdges<'a, V> {
    fn new(sources: hash_map::Iter<'a, V, Vec<V>>) -> Self {
        Self {
            sources,
            current: None,
        }
    }
}

impl<'a, V> Iterator for DirectedEdges<'a, V> {
    type Item = (&'a V, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((source, successors)) = &mut self.current {
                if let Some(destination) = successors.next() {
                    return Some((*source, destination));
                }
            }

            let (source, successors) = self.sources.next()?;
            self.current = Some((source, successors.iter()));
        }
    }
}
