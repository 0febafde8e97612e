pub mod bfs;
pub mod directed;
pub mod distance;
pub mod edges;
pub mod forward;
pub mod frontier;
pub mod hash_graph;
pub mod paths;
pub mod vertices;
pub mod visited;
