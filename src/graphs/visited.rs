use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Bookkeeping of the vertices a traversal has already discovered.
pub trait Visited<V>: Default {
    /// Marks a value as visited.
    ///
    /// Returns true only the first time a value is visited.
    fn visit(&mut self, value: V) -> bool;

    fn is_visited(&self, value: &V) -> bool;
}

impl<V, S> Visited<V> for HashSet<V, S>
where
    V: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn visit(&mut self, value: V) -> bool {
        self.insert(value)
    }

    #[inline]
    fn is_visited(&self, value: &V) -> bool {
        self.contains(value)
    }
}
