//! Sparse adjacency-matrix export.
//!
//! Rows and columns follow node insertion order. Each directed edge
//! contributes one nonzero term; undirected edges contribute both
//! orientations. With parallel edges, the first-inserted weight wins,
//! matching [`Graph::weight`](crate::Graph::weight).

use std::collections::{HashMap, HashSet};

use sparse_matrix::{LinkedSparseMatrix, SparseMatrix};

use crate::GraphView;

/// Array-backed sparse adjacency matrix.
pub fn adjacency_matrix<G: GraphView>(graph: &G) -> SparseMatrix {
    let nodes = graph.node_ids();
    let index: HashMap<u64, usize> = nodes.iter().enumerate().map(|(i, &id)| (id, i)).collect();
    let mut matrix = SparseMatrix::new(nodes.len(), nodes.len());
    fill(graph, &nodes, &index, |row, col, value| {
        matrix.set(row, col, value);
    });
    matrix
}

/// Linked sparse adjacency matrix with the same contents as
/// [`adjacency_matrix`].
pub fn adjacency_matrix_linked<G: GraphView>(graph: &G) -> LinkedSparseMatrix {
    let nodes = graph.node_ids();
    let index: HashMap<u64, usize> = nodes.iter().enumerate().map(|(i, &id)| (id, i)).collect();
    let mut matrix = LinkedSparseMatrix::new(nodes.len(), nodes.len());
    fill(graph, &nodes, &index, |row, col, value| {
        matrix.set(row, col, value);
    });
    matrix
}

fn fill<G, F>(graph: &G, nodes: &[u64], index: &HashMap<u64, usize>, mut set: F)
where
    G: GraphView,
    F: FnMut(usize, usize, f64),
{
    for &node in nodes {
        let row = index[&node];
        let mut seen = HashSet::new();
        for (neighbor, weight) in graph.neighbors(node) {
            // First-inserted parallel edge wins.
            if seen.insert(neighbor) {
                set(row, index[&neighbor], weight);
            }
        }
    }
}
