use std::mem;

/// Layer-by-layer worklist for breadth-first traversals.
pub trait Frontier<T> {
    /// Expands the current layer into the next one.
    ///
    /// Returns the layer that was expanded, or `None` once the frontier is
    /// exhausted.
    fn step<F>(&mut self, expand: F) -> Option<Vec<T>>
    where
        F: FnMut(&[T], &mut Vec<T>);
}

/// A frontier holding one BFS layer at a time.
///
/// Processing the layers in order and each layer front to back visits
/// vertices in exactly the order of a FIFO queue. The number of layers
/// stepped so far is the distance of the current layer from the seeds.
#[derive(Debug)]
pub struct LayeredFrontier<T> {
    frontier: Vec<T>,
    next: Vec<T>,
    depth: usize,
}

impl<T> Default for LayeredFrontier<T> {
    fn default() -> Self {
        Self {
            frontier: Vec::new(),
            next: Vec::new(),
            depth: 0,
        }
    }
}

impl<T> LayeredFrontier<T> {
    pub fn new<I: IntoIterator<Item = T>>(initial: I) -> Self {
        Self {
            frontier: initial.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    pub fn layer(&self) -> &[T] {
        &self.frontier
    }

    pub fn len(&self) -> usize {
        self.frontier.len()
    }

    /// Distance from the seeds of the layer that the next step yields.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<T> Frontier<T> for LayeredFrontier<T> {
    fn step<F>(&mut self, mut expand: F) -> Option<Vec<T>>
    where
        F: FnMut(&[T], &mut Vec<T>),
    {
        if self.frontier.is_empty() {
            return None;
        }

        let current = mem::take(&mut self.frontier);
        self.next.clear();

        expand(&current, &mut self.next);

        self.frontier = mem::take(&mut self.next);
        self.depth += 1;
        Some(current)
    }
}
