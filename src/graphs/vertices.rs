use std::hash::Hash;

/// Read access to the vertex set of a graph.
///
/// Vertices are identified by value: two vertices that compare equal
/// (and hash equally) are the same vertex.
/// Implementations own their vertices and hand out shared references,
/// so traversals can work on borrowed vertices without cloning them.
pub trait Vertices {
    /// Type used to identify vertices.
    type Vertex: Eq + Hash;

    /// Iterator over all vertices in the graph.
    ///
    /// The order of vertices depends on the implementation, but should be stable
    /// for a given graph instance unless the graph is mutated.
    type Vertices<'a>: Iterator<Item = &'a Self::Vertex> + Clone
    where
        Self: 'a;

    /// Returns an iterator over all vertices in the graph.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Returns the stored vertex equal to the given one, if any.
    ///
    /// The returned reference lives as long as the graph borrow,
    /// independent of the lifetime of the probe.
    fn get_vertex(&self, vertex: &Self::Vertex) -> Option<&Self::Vertex>;

    /// Returns true when the vertex is part of the graph.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        self.get_vertex(vertex).is_some()
    }

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}
