//! Error types for graph operations.

/// Graph error types.
///
/// Vertex identities are plain values of the vertex type, never optional,
/// so a missing ("null") identity cannot be passed to any operation.
/// Absent vertices are an error only where a query has no meaningful
/// negative answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The vertex is not part of the graph.
    ///
    /// Carries the `Debug` rendering of the vertex.
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
