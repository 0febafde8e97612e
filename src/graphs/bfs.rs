use rustc_hash::FxHashSet;

use crate::graphs::distance::Distance;
use crate::graphs::forward::Forward;
use crate::graphs::frontier::{Frontier, LayeredFrontier};
use crate::graphs::visited::Visited;

/// Layered breadth-first traversal over a [`Forward`] graph.
///
/// Each call to `next` yields one BFS layer: the seeds first, then every
/// vertex at distance one, and so on. Within a layer vertices appear in the
/// order a FIFO queue would dequeue them, i.e. in the stored successor order
/// of their discoverers. Every reachable vertex appears in exactly one layer.
pub struct GraphBFS<'g, G, S>
where
    G: Forward,
    S: Visited<&'g G::Vertex>,
{
    graph: &'g G,
    visited: S,
    frontier: LayeredFrontier<&'g G::Vertex>,
}

impl<'g, G, S> GraphBFS<'g, G, S>
where
    G: Forward,
    S: Visited<&'g G::Vertex>,
{
    /// Seeds a traversal from the given vertices.
    ///
    /// Seeds that are not vertices of the graph are ignored,
    /// duplicate seeds are collapsed.
    pub fn new<'a>(graph: &'g G, initials: impl IntoIterator<Item = &'a G::Vertex>) -> Self
    where
        G::Vertex: 'a,
    {
        let mut visited = S::default();
        let mut initial_frontier = Vec::new();

        for value in initials {
            if let Some(vertex) = graph.get_vertex(value) {
                if visited.visit(vertex) {
                    initial_frontier.push(vertex);
                }
            }
        }

        let frontier = LayeredFrontier::new(initial_frontier);

        // debug: all seeds are visited
        debug_assert!(frontier.layer().iter().all(|v| visited.is_visited(v)));

        Self {
            graph,
            visited,
            frontier,
        }
    }

    /// Distance from the seeds of the layer the next step yields.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frontier.depth()
    }

    #[inline]
    pub fn visited(&self) -> &S {
        &self.visited
    }

    #[inline]
    pub fn into_visited(self) -> S {
        self.visited
    }

    /// Yields the current layer and discovers the next one.
    pub fn step(&mut self) -> Option<Vec<&'g G::Vertex>> {
        let graph = self.graph;
        let visited = &mut self.visited;

        self.frontier.step(|current, next| {
            for &from in current {
                for to in graph.successors(from) {
                    if visited.visit(to) {
                        next.push(to);
                    }
                }
            }

            // debug invariant: next is a subset of visited
            debug_assert!(next.iter().all(|v| visited.is_visited(v)));
        })
    }

    /// Runs the traversal until `target` is discovered and returns its
    /// distance from the seeds.
    ///
    /// The search stops at the successor scan that discovers `target`, so
    /// the layer being expanded is left incomplete and further steps no
    /// longer follow BFS order. Returns `None` once the frontier is
    /// exhausted without discovering `target`.
    pub fn distance_to(&mut self, target: &G::Vertex) -> Option<usize> {
        if self.frontier.layer().iter().any(|&seed| seed == target) {
            return Some(self.depth());
        }

        let graph = self.graph;
        loop {
            let visited = &mut self.visited;
            let mut found = false;

            self.frontier.step(|current, next| {
                'scan: for &from in current {
                    for to in graph.successors(from) {
                        if visited.visit(to) {
                            next.push(to);
                            if to == target {
                                found = true;
                                break 'scan;
                            }
                        }
                    }
                }
            })?;

            // The discovered layer is the one the next step would yield.
            if found {
                return Some(self.depth());
            }
        }
    }

    /// Runs the traversal to completion and returns every reachable vertex.
    pub fn reachable(mut self) -> S {
        while self.step().is_some() {}
        self.into_visited()
    }
}

impl<'g, G, S> Iterator for GraphBFS<'g, G, S>
where
    G: Forward,
    S: Visited<&'g G::Vertex>,
{
    type Item = Vec<&'g G::Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

/// Returns true iff `to` can be reached from `from`.
///
/// Both vertices must be part of the graph. A vertex always reaches
/// itself, even without a self loop. The search ends as soon as `to` is
/// discovered.
pub fn has_path<G>(graph: &G, from: &G::Vertex, to: &G::Vertex) -> bool
where
    G: Forward,
{
    let mut bfs: GraphBFS<G, FxHashSet<&G::Vertex>> = GraphBFS::new(graph, [from]);
    bfs.distance_to(to).is_some()
}

/// Number of edges on a shortest path from `from` to `to`.
///
/// Returns [`Distance::ZERO`] when both are the same vertex and
/// [`Distance::INFINITY`] when there is no path or either vertex is absent.
/// BFS discovers `to` first through a shortest path, so the depth of the
/// layer it is discovered into is its distance.
pub fn path_length<G>(graph: &G, from: &G::Vertex, to: &G::Vertex) -> Distance
where
    G: Forward,
{
    let mut bfs: GraphBFS<G, FxHashSet<&G::Vertex>> = GraphBFS::new(graph, [from]);
    bfs.distance_to(to).map_or(Distance::INFINITY, Distance::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use rustc_hash::FxHashMap;
    use std::collections::{HashSet, VecDeque};

    use crate::graphs::hash_graph::DirectedGraph;
    use crate::graphs::vertices::Vertices;

    /// Reference BFS distances from a single source.
    fn reference_distances(g: &DirectedGraph<u8>, source: u8) -> FxHashMap<u8, usize> {
        let mut dist = FxHashMap::default();
        if !g.contains(&source) {
            return dist;
        }

        let mut q = VecDeque::new();
        dist.insert(source, 0);
        q.push_back(source);

        while let Some(u) = q.pop_front() {
            let du = dist[&u];
            for &v in g.adjacent_to(&u) {
                if !dist.contains_key(&v) {
                    dist.insert(v, du + 1);
                    q.push_back(v);
                }
            }
        }

        dist
    }

    #[test]
    fn bfs_empty_graph_no_initials() {
        let g = DirectedGraph::<u8>::new();

        let mut bfs: GraphBFS<DirectedGraph<u8>, FxHashSet<&u8>> =
            GraphBFS::new(&g, std::iter::empty());

        assert!(bfs.next().is_none());
        assert!(bfs.into_visited().is_empty());
    }

    #[test]
    fn bfs_ignores_seeds_outside_the_graph() {
        let g = DirectedGraph::from(vec![(0_u8, 1_u8)]);

        let mut bfs: GraphBFS<DirectedGraph<u8>, FxHashSet<&u8>> = GraphBFS::new(&g, [&7, &0, &0]);

        assert_eq!(bfs.next(), Some(vec![&0]));
        assert_eq!(bfs.next(), Some(vec![&1]));
        assert_eq!(bfs.next(), None);
    }

    #[test]
    fn bfs_line_graph_layers() {
        // 0 -> 1 -> 2 -> 3
        let g = DirectedGraph::from(vec![(0_u8, 1_u8), (1, 2), (2, 3)]);

        let bfs: GraphBFS<DirectedGraph<u8>, FxHashSet<&u8>> = GraphBFS::new(&g, [&0]);
        let layers: Vec<Vec<&u8>> = bfs.collect();

        assert_eq!(layers, vec![vec![&0], vec![&1], vec![&2], vec![&3]]);
    }

    #[test]
    fn bfs_branching_layers_follow_successor_order() {
        // 0 -> 2, 0 -> 1, 1 -> 3, 2 -> 3
        let g = DirectedGraph::from(vec![(0_u8, 2_u8), (0, 1), (1, 3), (2, 3)]);

        let mut bfs: GraphBFS<DirectedGraph<u8>, FxHashSet<&u8>> = GraphBFS::new(&g, [&0]);

        assert_eq!(bfs.depth(), 0);
        assert_eq!(bfs.next(), Some(vec![&0]));
        assert_eq!(bfs.depth(), 1);
        assert_eq!(bfs.next(), Some(vec![&2, &1]));
        assert_eq!(bfs.next(), Some(vec![&3]));
        assert_eq!(bfs.next(), None);
        assert_eq!(bfs.visited().len(), 4);
    }

    #[test]
    fn bfs_cycle_terminates_and_reaches_all() {
        // 0 -> 1 -> 2 -> 1
        let g = DirectedGraph::from(vec![(0_u8, 1_u8), (1, 2), (2, 1)]);

        let bfs: GraphBFS<DirectedGraph<u8>, FxHashSet<&u8>> = GraphBFS::new(&g, [&0]);
        let reached = bfs.reachable();

        let expected: FxHashSet<&u8> = [&0, &1, &2].into_iter().collect();
        assert_eq!(reached, expected);
    }

    #[test]
    fn reachable_with_std_hash_set() {
        // Component A: 0 -> 1, component B: 2 -> 3
        let g = DirectedGraph::from(vec![(0_u8, 1_u8), (2, 3)]);

        let bfs: GraphBFS<DirectedGraph<u8>, HashSet<&u8>> = GraphBFS::new(&g, [&2]);
        let reached = bfs.reachable();

        let expected: HashSet<&u8> = [&2, &3].into_iter().collect();
        assert_eq!(reached, expected);
    }

    #[test]
    fn distance_to_stops_at_discovery() {
        // A -> B -> C -> D
        let g = DirectedGraph::from(vec![("A", "B"), ("B", "C"), ("C", "D")]);

        let mut bfs: GraphBFS<DirectedGraph<&str>, FxHashSet<&&str>> = GraphBFS::new(&g, [&"A"]);
        assert_eq!(bfs.distance_to(&"B"), Some(1));

        let expected: FxHashSet<&&str> = [&"A", &"B"].into_iter().collect();
        assert_eq!(bfs.visited(), &expected, "C must not be discovered");
    }

    #[test]
    fn distance_to_leaves_the_rest_of_the_layer_unscanned() {
        // A -> B, A -> C, A -> D
        let g = DirectedGraph::from(vec![("A", "B"), ("A", "C"), ("A", "D")]);

        let mut bfs: GraphBFS<DirectedGraph<&str>, FxHashSet<&&str>> = GraphBFS::new(&g, [&"A"]);
        assert_eq!(bfs.distance_to(&"C"), Some(1));
        assert!(!bfs.visited().is_visited(&&"D"));
    }

    #[test]
    fn distance_to_seed_and_unreachable_target() {
        let g = DirectedGraph::from(vec![("A", "B"), ("C", "A")]);

        let mut bfs: GraphBFS<DirectedGraph<&str>, FxHashSet<&&str>> = GraphBFS::new(&g, [&"A"]);
        assert_eq!(bfs.distance_to(&"A"), Some(0));

        let mut bfs: GraphBFS<DirectedGraph<&str>, FxHashSet<&&str>> = GraphBFS::new(&g, [&"A"]);
        assert_eq!(bfs.distance_to(&"C"), None);
        assert_eq!(bfs.visited().len(), 2);

        let mut bfs: GraphBFS<DirectedGraph<&str>, FxHashSet<&&str>> = GraphBFS::new(&g, [&"Z"]);
        assert_eq!(bfs.distance_to(&"Z"), None, "absent seeds are never visited");
    }

    #[test]
    fn has_path_to_self_requires_presence() {
        let mut g = DirectedGraph::new();
        g.add_vertex("A");

        assert!(has_path(&g, &"A", &"A"));
        assert!(!has_path(&g, &"B", &"B"));
        assert_eq!(path_length(&g, &"A", &"A"), Distance::ZERO);
        assert_eq!(path_length(&g, &"B", &"B"), Distance::INFINITY);
    }

    #[test]
    fn has_path_respects_direction() {
        let g = DirectedGraph::from(vec![("A", "B"), ("B", "C")]);

        assert!(has_path(&g, &"A", &"C"));
        assert!(!has_path(&g, &"C", &"A"));
        assert!(!has_path(&g, &"A", &"Z"));
        assert!(!has_path(&g, &"Z", &"A"));
        assert_eq!(path_length(&g, &"A", &"C"), Distance::new(2));
        assert_eq!(path_length(&g, &"C", &"A"), Distance::INFINITY);
    }

    #[test]
    fn path_length_takes_the_shorter_branch() {
        // A -> B -> C -> D and a shortcut A -> D
        let g = DirectedGraph::from(vec![("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")]);

        assert_eq!(path_length(&g, &"A", &"D"), Distance::new(1));
    }

    // Random edge generator for small graphs over 16 vertices.
    prop_compose! {
        fn random_edge_list()
            (edges in prop::collection::vec((0u8..=15, 0u8..=15), 0..=64))
            -> Vec<(u8, u8)>
        {
            edges
        }
    }

    proptest! {
        // BFS layers must match shortest-path distances from the seed.
        #[test]
        fn prop_bfs_layers_match_shortest_paths(
            edges in random_edge_list(),
            source in 0u8..=15,
        ) {
            let g = DirectedGraph::from(edges);
            let dist = reference_distances(&g, source);

            let bfs: GraphBFS<DirectedGraph<u8>, FxHashSet<&u8>> = GraphBFS::new(&g, [&source]);
            let mut seen = 0;
            for (depth, layer) in bfs.enumerate() {
                prop_assert!(!layer.is_empty());
                for v in layer {
                    prop_assert_eq!(dist.get(v), Some(&depth), "distance/layer mismatch for vertex {}", v);
                    seen += 1;
                }
            }

            prop_assert_eq!(seen, dist.len());
        }

        // path_length and has_path agree with the reference BFS for every pair.
        #[test]
        fn prop_path_queries_match_reference(
            edges in random_edge_list(),
            source in 0u8..=17,
            target in 0u8..=17,
        ) {
            let g = DirectedGraph::from(edges);
            let dist = reference_distances(&g, source);
            let expected = match dist.get(&target) {
                Some(&d) if g.contains(&target) => Distance::new(d),
                _ => Distance::INFINITY,
            };

            prop_assert_eq!(path_length(&g, &source, &target), expected);
            prop_assert_eq!(has_path(&g, &source, &target), expected.is_reachable());
        }

        // Rerunning from the reachable set does not grow it.
        #[test]
        fn prop_reachable_is_closed(
            edges in random_edge_list(),
            source in 0u8..=15,
        ) {
            let g = DirectedGraph::from(edges);

            let first: FxHashSet<&u8> =
                GraphBFS::<DirectedGraph<u8>, FxHashSet<&u8>>::new(&g, [&source]).reachable();
            let second: FxHashSet<&u8> =
                GraphBFS::<DirectedGraph<u8>, FxHashSet<&u8>>::new(&g, first.iter().copied()).reachable();

            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn random_stress_path_length_matches_reference_bfs() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x_4246_535F_5354_5245);

        for _case in 0..100 {
            let edge_count = rng.random_range(0..=80usize);
            let mut g = DirectedGraph::new();

            for _ in 0..edge_count {
                let from: u8 = rng.random_range(0..=10);
                let to: u8 = rng.random_range(0..=10);
                g.add_edge(from, to);
            }

            for source in 0..=10u8 {
                let dist = reference_distances(&g, source);
                for target in 0..=10u8 {
                    let expected = dist
                        .get(&target)
                        .map_or(Distance::INFINITY, |&d| Distance::new(d));
                    assert_eq!(path_length(&g, &source, &target), expected);
                }
            }

            assert_eq!(g.vertex_count(), g.num_vertices());
        }
    }
}
