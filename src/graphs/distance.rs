use std::fmt;

/// Number of edges on a path, or [`Distance::INFINITY`] when no path exists.
///
/// Also known as "level" or "hop count" in breadth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Distance(pub usize);

impl Distance {
    /// Infinity (unreachable).
    pub const INFINITY: Distance = Distance(usize::MAX);

    /// Zero distance (a vertex to itself).
    pub const ZERO: Distance = Distance(0);

    pub const fn new(hops: usize) -> Self {
        Distance(hops)
    }

    /// Check if the target is reachable.
    pub const fn is_reachable(&self) -> bool {
        self.0 != usize::MAX
    }

    /// Get the inner value.
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for Distance {
    fn from(hops: usize) -> Self {
        Distance(hops)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reachable() {
            write!(f, "{}", self.0)
        } else {
            f.write_str("inf")
        }
    }
}
