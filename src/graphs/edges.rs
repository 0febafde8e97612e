use crate::graphs::vertices::Vertices;

/// A graph that supports read-only access to its edges.
///
/// Each edge is a pair `(source, destination)` of vertices owned by the
/// graph. A pair of vertices is connected by at most one edge, so the pair
/// itself identifies the edge.
pub trait ReadEdges: Vertices {
    /// Iterator over all edges in the graph.
    ///
    /// The order of edges depends on the implementation, but should be stable
    /// for a given graph instance unless the graph is mutated.
    type Edges<'a>: Iterator<Item = (&'a Self::Vertex, &'a Self::Vertex)>
    where
        Self: 'a;

    /// Returns an iterator over all edges in the graph.
    fn edges(&self) -> Self::Edges<'_>;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

/// A graph that supports insertion of edges.
pub trait InsertEdge: ReadEdges {
    /// Inserts the directed edge `(source, destination)`.
    ///
    /// Endpoints that are not yet vertices are added first.
    /// Returns false when the edge was already present, since a pair of
    /// vertices is connected by at most one edge.
    fn insert_edge(&mut self, endpoints: (Self::Vertex, Self::Vertex)) -> bool;
}

/// A graph that supports removal of edges.
pub trait RemoveEdge: ReadEdges {
    /// Removes the directed edge `(source, destination)`.
    ///
    /// Both endpoints stay in the graph. Returns false when there was no
    /// such edge.
    fn remove_edge(&mut self, endpoints: (&Self::Vertex, &Self::Vertex)) -> bool;
}
