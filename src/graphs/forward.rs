use crate::graphs::directed::Directed;

/// Forward view of a directed graph used by traversals.
pub trait Forward: Directed {
    type Successors<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    fn successors(&self, vertex: &Self::Vertex) -> Self::Successors<'_>;
}

impl<T> Forward for T
where
    T: Directed,
{
    type Successors<'a>
        = <T as Directed>::Outgoing<'a>
    where
        Self: 'a;

    fn successors(&self, vertex: &Self::Vertex) -> Self::Successors<'_> {
        self.outgoing(vertex)
    }
}
