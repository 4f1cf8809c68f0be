//! Graph algorithms.
//!
//! Every routine here is a free function over the
//! [`GraphView`](crate::GraphView) capability trait:
//! - Spanning forest and connected components
//! - Biconnected components, articulation points, and bridges
//! - Minimum spanning tree: Kruskal, Prim, Sollin
//! - Shortest paths: Dijkstra, Bellman-Ford, Floyd (all pairs)
//! - Sparse adjacency-matrix export

mod biconnected;
mod matrix;
mod mst;
mod shortest_path;
mod spanning;

pub use biconnected::{biconnected_components, BiconnectedResult};
pub use matrix::{adjacency_matrix, adjacency_matrix_linked};
pub use mst::{kruskal, prim, sollin, MstResult};
pub use shortest_path::{bellman_ford, dijkstra, floyd, FloydResult, WeightedPath};
pub use spanning::{components, spanning_forest};
