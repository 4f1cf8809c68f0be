//! Minimum spanning tree: Kruskal, Prim, and Sollin (Borůvka).
//!
//! All three agree on total weight for a connected graph; equal-weight
//! ties may resolve to different edges. Edge direction is ignored.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Edge, GraphError, GraphView, MinHeap, Result, UnionFind};

/// Result of MST computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstResult {
    /// Edges in the minimum spanning tree (or forest).
    pub edges: Vec<Edge>,
    /// Total weight of the selected edges.
    pub total_weight: f64,
    /// Number of trees (1 for connected graphs).
    pub tree_count: usize,
    /// Nodes covered by the result.
    pub nodes: Vec<u64>,
}

impl MstResult {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0.0,
            tree_count: 0,
            nodes: Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.tree_count == 1
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Default for MstResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Kruskal's algorithm: edges in ascending weight order, cycle detection
/// via union-find. Disconnected input yields a spanning forest.
///
/// Time complexity: O(E log E).
pub fn kruskal<G: GraphView>(graph: &G) -> MstResult {
    let nodes = graph.node_ids();
    if nodes.is_empty() {
        return MstResult::empty();
    }

    let mut edges = graph.edges();
    // Stable sort: equal weights keep the deterministic edge-list order.
    edges.sort_by(|a, b| {
        a.weight
            .partial_cmp(&b.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut uf = UnionFind::new(&nodes);
    let mut tree_edges = Vec::new();
    let mut total_weight = 0.0;

    for edge in edges {
        if uf.union(edge.from, edge.to) {
            total_weight += edge.weight;
            tree_edges.push(edge);
            if tree_edges.len() == nodes.len() - 1 {
                break;
            }
        }
    }

    let tree_count = uf.set_count();
    if tree_count > 1 {
        warn!(tree_count, "kruskal on disconnected graph, returning forest");
    }

    MstResult {
        edges: tree_edges,
        total_weight,
        tree_count,
        nodes,
    }
}

/// Prim's algorithm grown from `start`, spanning only its component.
/// The indexed min-heap tracks the cheapest crossing edge per outside
/// node; equal-weight ties keep the first-found edge.
///
/// Time complexity: O(E log V).
pub fn prim<G: GraphView>(graph: &G, start: u64) -> Result<MstResult> {
    if !graph.contains_node(start) {
        return Err(GraphError::NodeNotFound(start));
    }

    let adjacency = symmetric_adjacency(graph);

    let mut heap = MinHeap::new();
    let mut best_edge: HashMap<u64, Edge> = HashMap::new();
    let mut in_tree = HashSet::new();
    let mut spanned = Vec::new();
    let mut tree_edges = Vec::new();
    let mut total_weight = 0.0;

    heap.push(start, 0.0);

    while let Some((node, weight)) = heap.pop() {
        in_tree.insert(node);
        spanned.push(node);
        if node != start {
            if let Some(edge) = best_edge.remove(&node) {
                total_weight += weight;
                tree_edges.push(edge);
            }
        }

        if let Some(neighbors) = adjacency.get(&node) {
            for &(neighbor, weight) in neighbors {
                if !in_tree.contains(&neighbor) && heap.push(neighbor, weight) {
                    best_edge.insert(
                        neighbor,
                        Edge {
                            from: node,
                            to: neighbor,
                            weight,
                        },
                    );
                }
            }
        }
    }

    Ok(MstResult {
        edges: tree_edges,
        total_weight,
        tree_count: 1,
        nodes: spanned,
    })
}

/// Sollin's (Borůvka's) algorithm: every fragment selects its cheapest
/// outgoing edge each round, fragments merge via union-find, until no
/// merge is possible.
///
/// Time complexity: O(E log V).
pub fn sollin<G: GraphView>(graph: &G) -> MstResult {
    let nodes = graph.node_ids();
    if nodes.is_empty() {
        return MstResult::empty();
    }

    let edges = graph.edges();
    let mut uf = UnionFind::new(&nodes);
    let mut tree_edges = Vec::new();
    let mut total_weight = 0.0;

    loop {
        // Cheapest outgoing edge per fragment root; strict comparison
        // keeps the earliest edge on ties.
        let mut cheapest: HashMap<u64, usize> = HashMap::new();
        for (idx, edge) in edges.iter().enumerate() {
            let ra = uf.find(edge.from);
            let rb = uf.find(edge.to);
            if ra == rb {
                continue;
            }
            for root in [ra, rb] {
                let replace = cheapest
                    .get(&root)
                    .map_or(true, |&held| edge.weight < edges[held].weight);
                if replace {
                    cheapest.insert(root, idx);
                }
            }
        }
        if cheapest.is_empty() {
            break;
        }

        let mut selected: Vec<usize> = cheapest.into_values().collect();
        selected.sort_unstable();
        selected.dedup();

        let mut merged = false;
        for idx in selected {
            let edge = edges[idx];
            // Two fragments may have picked edges that close a cycle
            // within this round; the union check rejects the second.
            if uf.union(edge.from, edge.to) {
                total_weight += edge.weight;
                tree_edges.push(edge);
                merged = true;
            }
        }
        if !merged {
            break;
        }
    }

    let tree_count = uf.set_count();
    if tree_count > 1 {
        warn!(tree_count, "sollin on disconnected graph, returning forest");
    }

    MstResult {
        edges: tree_edges,
        total_weight,
        tree_count,
        nodes,
    }
}

/// Direction-blind adjacency in deterministic edge-list order.
fn symmetric_adjacency<G: GraphView>(graph: &G) -> HashMap<u64, Vec<(u64, f64)>> {
    let mut adjacency: HashMap<u64, Vec<(u64, f64)>> = HashMap::new();
    for edge in graph.edges() {
        adjacency
            .entry(edge.from)
            .or_default()
            .push((edge.to, edge.weight));
        if edge.from != edge.to {
            adjacency
                .entry(edge.to)
                .or_default()
                .push((edge.from, edge.weight));
        }
    }
    adjacency
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Graph, GraphConfig};

    fn weighted(n: usize, edges: &[(u64, u64, f64)]) -> Graph {
        let mut g = Graph::new(n, GraphConfig::new().weighted(true));
        for &(u, v, w) in edges {
            g.add_edge(u, v, w).unwrap();
        }
        g
    }

    fn triangle_plus_tail() -> Graph {
        weighted(4, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0), (2, 3, 4.0)])
    }

    #[test]
    fn kruskal_empty_graph() {
        let g = Graph::new(0, GraphConfig::new().weighted(true));
        assert_eq!(kruskal(&g), MstResult::empty());
    }

    #[test]
    fn kruskal_selects_minimum_edges() {
        let result = kruskal(&triangle_plus_tail());
        assert_eq!(result.edge_count(), 3);
        assert!((result.total_weight - 7.0).abs() < f64::EPSILON);
        assert!(result.is_connected());
    }

    #[test]
    fn kruskal_disconnected_returns_forest() {
        let g = weighted(4, &[(0, 1, 1.0), (2, 3, 2.0)]);
        let result = kruskal(&g);
        assert_eq!(result.tree_count, 2);
        assert_eq!(result.edge_count(), 2);
        assert!(!result.is_connected());
    }

    #[test]
    fn prim_matches_kruskal_weight() {
        let g = triangle_plus_tail();
        let result = prim(&g, 0).unwrap();
        assert_eq!(result.edge_count(), 3);
        assert!((result.total_weight - kruskal(&g).total_weight).abs() < f64::EPSILON);
        assert_eq!(result.nodes.len(), 4);
    }

    #[test]
    fn prim_spans_start_component_only() {
        let g = weighted(4, &[(0, 1, 1.0), (2, 3, 2.0)]);
        let result = prim(&g, 0).unwrap();
        assert_eq!(result.nodes, vec![0, 1]);
        assert_eq!(result.edge_count(), 1);
    }

    #[test]
    fn prim_missing_start_is_an_error() {
        let g = triangle_plus_tail();
        assert_eq!(prim(&g, 99), Err(GraphError::NodeNotFound(99)));
    }

    #[test]
    fn sollin_matches_kruskal_weight() {
        let g = triangle_plus_tail();
        let result = sollin(&g);
        assert_eq!(result.edge_count(), 3);
        assert!((result.total_weight - kruskal(&g).total_weight).abs() < f64::EPSILON);
        assert!(result.is_connected());
    }

    #[test]
    fn sollin_survives_uniform_weights() {
        // All ties: rounds must still terminate without forming cycles.
        let g = weighted(
            4,
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0), (0, 2, 1.0)],
        );
        let result = sollin(&g);
        assert_eq!(result.edge_count(), 3);
        assert!((result.total_weight - 3.0).abs() < f64::EPSILON);
        assert!(result.is_connected());
    }

    #[test]
    fn single_node_is_one_tree() {
        let g = Graph::new(1, GraphConfig::new().weighted(true));
        let result = kruskal(&g);
        assert_eq!(result.tree_count, 1);
        assert!(result.edges.is_empty());
        assert_eq!(prim(&g, 0).unwrap().nodes, vec![0]);
    }

    #[test]
    fn mst_methods_return_independent_graphs() {
        let g = triangle_plus_tail();
        let tree = g.kruskal();
        assert_eq!(tree.node_count(), g.node_count());
        assert_eq!(tree.edge_count(), 3);
        assert!((tree.total_weight() - 7.0).abs() < f64::EPSILON);
    }
}
