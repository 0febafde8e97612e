use crate::graphs::edges::ReadEdges;

/// Core abstraction for finite directed graphs.
///
/// Vertices represent nodes in the graph, and edges represent directed
/// connections from a source vertex to a destination vertex.
///
/// The trait focuses on structural access to outgoing adjacency.
/// Traversal, reachability, and shortest path computation are written as
/// generic helpers on top of this interface (see [`crate::graphs::bfs`]).
pub trait Directed: ReadEdges {
    /// Iterator over the direct successors of a vertex.
    ///
    /// Successors are yielded in the order the graph stores them.
    type Outgoing<'a>: Iterator<Item = &'a Self::Vertex> + Clone
    where
        Self: 'a;

    /// Returns the destinations of all edges whose source is the given vertex.
    ///
    /// A vertex that is not part of the graph has no successors.
    fn outgoing(&self, source: &Self::Vertex) -> Self::Outgoing<'_>;

    /// Returns the number of edges with the given source vertex.
    fn outgoing_degree(&self, vertex: &Self::Vertex) -> usize {
        self.outgoing(vertex).count()
    }

    /// Returns true when there is an edge from `from` to `to`.
    ///
    /// This checks for a single step edge only,
    /// it does not perform a reachability query through longer paths.
    fn is_connected(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool {
        self.outgoing(from).any(|successor| successor == to)
    }
}
