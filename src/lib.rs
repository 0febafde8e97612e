//! A generic directed graph keyed by hashable vertex values.
//!
//! [`DirectedGraph`] stores, for every vertex, the ordered list of its direct
//! successors. On top of the structural queries it answers path queries with
//! breadth-first search:
//!
//! - **Reachability**: [`DirectedGraph::has_path`]
//! - **Shortest path length**: [`DirectedGraph::path_length`], returning a
//!   [`Distance`] that is [`Distance::INFINITY`] for unreachable targets
//! - **Shortest path**: [`DirectedGraph::get_path`]
//!
//! The traversals in [`graphs::bfs`] and [`graphs::paths`] are generic over
//! the [`graphs::forward::Forward`] trait and work on any graph type
//! implementing [`graphs::directed::Directed`].
//!
//! # Example
//!
//! ```
//! use hashgraph::{DirectedGraph, Distance};
//!
//! let graph: DirectedGraph<&str> = [("A", "B"), ("A", "E"), ("B", "D"), ("E", "D")]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(graph.path_length(&"A", &"D"), Distance::new(2));
//! assert_eq!(graph.path_length(&"D", &"A"), Distance::INFINITY);
//! ```

pub mod error;
pub mod graphs;

pub use error::{GraphError, Result};
pub use graphs::distance::Distance;
pub use graphs::hash_graph::{DirectedEdges, DirectedGraph};
