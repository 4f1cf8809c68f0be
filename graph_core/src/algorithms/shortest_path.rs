//! Shortest-path algorithms: Dijkstra, Bellman-Ford, Floyd.
//!
//! Unreachable destinations are reported as an empty path, never an
//! error. Direction is respected; undirected edges relax both ways.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{GraphError, GraphView, MinHeap, Result};

/// A weighted path as a node sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedPath {
    pub nodes: Vec<u64>,
    pub total_weight: f64,
}

impl WeightedPath {
    /// The empty path, reported for unreachable destinations.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            total_weight: 0.0,
        }
    }

    #[must_use]
    pub fn found(&self) -> bool {
        !self.nodes.is_empty()
    }

    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

impl Default for WeightedPath {
    fn default() -> Self {
        Self::empty()
    }
}

/// Dijkstra's single-source shortest path from `source` to `dest`.
///
/// Fails with [`GraphError::NegativeWeight`] if any edge weight is
/// negative; the algorithm's greedy settlement is unsound otherwise.
///
/// Time complexity: O((V + E) log V).
pub fn dijkstra<G: GraphView>(graph: &G, source: u64, dest: u64) -> Result<WeightedPath> {
    if !graph.contains_node(source) {
        return Err(GraphError::NodeNotFound(source));
    }
    if !graph.contains_node(dest) {
        return Err(GraphError::NodeNotFound(dest));
    }
    for edge in graph.edges() {
        if edge.weight < 0.0 {
            return Err(GraphError::NegativeWeight {
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
            });
        }
    }
    if source == dest {
        return Ok(WeightedPath {
            nodes: vec![source],
            total_weight: 0.0,
        });
    }

    let mut dist: HashMap<u64, f64> = HashMap::new();
    let mut parent: HashMap<u64, u64> = HashMap::new();
    let mut heap = MinHeap::new();

    dist.insert(source, 0.0);
    heap.push(source, 0.0);

    while let Some((node, node_dist)) = heap.pop() {
        if node == dest {
            return Ok(WeightedPath {
                nodes: reconstruct(source, dest, &parent),
                total_weight: node_dist,
            });
        }
        for (neighbor, weight) in graph.neighbors(node) {
            let candidate = node_dist + weight;
            let improved = dist
                .get(&neighbor)
                .map_or(true, |&current| candidate < current);
            if improved && heap.push(neighbor, candidate) {
                dist.insert(neighbor, candidate);
                parent.insert(neighbor, node);
            }
        }
    }

    Ok(WeightedPath::empty())
}

/// Bellman-Ford shortest path from `source` to `dest`, tolerating
/// negative edge weights.
///
/// Relaxes every arc |V|-1 times; if pass |V| still improves a distance,
/// a reachable negative cycle exists and [`GraphError::NegativeCycle`]
/// is returned.
///
/// Time complexity: O(V * E).
pub fn bellman_ford<G: GraphView>(graph: &G, source: u64, dest: u64) -> Result<WeightedPath> {
    if !graph.contains_node(source) {
        return Err(GraphError::NodeNotFound(source));
    }
    if !graph.contains_node(dest) {
        return Err(GraphError::NodeNotFound(dest));
    }

    // Undirected edges relax in both directions.
    let mut arcs: Vec<(u64, u64, f64)> = Vec::new();
    for edge in graph.edges() {
        arcs.push((edge.from, edge.to, edge.weight));
        if !graph.is_directed() && edge.from != edge.to {
            arcs.push((edge.to, edge.from, edge.weight));
        }
    }

    let node_count = graph.node_ids().len();
    let mut dist: HashMap<u64, f64> = HashMap::new();
    let mut parent: HashMap<u64, u64> = HashMap::new();
    dist.insert(source, 0.0);

    for _ in 1..node_count {
        let mut changed = false;
        for &(from, to, weight) in &arcs {
            let Some(&d_from) = dist.get(&from) else {
                continue;
            };
            let candidate = d_from + weight;
            if dist.get(&to).map_or(true, |&d_to| candidate < d_to) {
                dist.insert(to, candidate);
                parent.insert(to, from);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    // Pass |V|: any remaining improvement proves a negative cycle.
    for &(from, to, weight) in &arcs {
        if let Some(&d_from) = dist.get(&from) {
            if dist.get(&to).map_or(true, |&d_to| d_from + weight < d_to) {
                return Err(GraphError::NegativeCycle);
            }
        }
    }

    match dist.get(&dest) {
        Some(&total_weight) if source != dest => Ok(WeightedPath {
            nodes: reconstruct(source, dest, &parent),
            total_weight,
        }),
        Some(_) => Ok(WeightedPath {
            nodes: vec![source],
            total_weight: 0.0,
        }),
        None => Ok(WeightedPath::empty()),
    }
}

fn reconstruct(source: u64, dest: u64, parent: &HashMap<u64, u64>) -> Vec<u64> {
    let mut nodes = vec![dest];
    let mut current = dest;
    while current != source {
        match parent.get(&current) {
            Some(&p) => {
                nodes.push(p);
                current = p;
            },
            None => break,
        }
    }
    nodes.reverse();
    nodes
}

/// All-pairs shortest distances with successor-matrix path
/// reconstruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloydResult {
    /// Node IDs in matrix order (node insertion order).
    pub nodes: Vec<u64>,
    index: HashMap<u64, usize>,
    /// `dist[i][j]` is the shortest distance, `f64::INFINITY` when
    /// unreachable.
    dist: Vec<Vec<f64>>,
    /// `next[i][j]` is the matrix index of the next hop on the shortest
    /// `i -> j` path.
    next: Vec<Vec<Option<usize>>>,
}

impl FloydResult {
    /// Shortest distance between two nodes; `None` for unknown nodes or
    /// unreachable pairs.
    #[must_use]
    pub fn distance(&self, from: u64, to: u64) -> Option<f64> {
        let &i = self.index.get(&from)?;
        let &j = self.index.get(&to)?;
        let d = self.dist[i][j];
        if d.is_finite() {
            Some(d)
        } else {
            None
        }
    }

    /// Shortest path as a node sequence; empty if unreachable or either
    /// node is unknown.
    #[must_use]
    pub fn path(&self, from: u64, to: u64) -> Vec<u64> {
        let (Some(&i), Some(&j)) = (self.index.get(&from), self.index.get(&to)) else {
            return Vec::new();
        };
        if i == j {
            return vec![from];
        }
        let mut current = match self.next[i][j] {
            Some(_) => i,
            None => return Vec::new(),
        };
        let mut nodes = vec![self.nodes[i]];
        while current != j {
            match self.next[current][j] {
                Some(step) => {
                    nodes.push(self.nodes[step]);
                    current = step;
                },
                None => return Vec::new(),
            }
        }
        nodes
    }
}

/// Floyd's all-pairs shortest paths over the direct-edge distance
/// matrix.
///
/// Time complexity: O(V^3). Negative cycles leave negative diagonal
/// entries; distances through them are not meaningful.
pub fn floyd<G: GraphView>(graph: &G) -> FloydResult {
    let nodes = graph.node_ids();
    let n = nodes.len();
    let index: HashMap<u64, usize> = nodes.iter().enumerate().map(|(i, &id)| (id, i)).collect();

    let mut dist = vec![vec![f64::INFINITY; n]; n];
    let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

    for i in 0..n {
        dist[i][i] = 0.0;
        next[i][i] = Some(i);
    }
    for edge in graph.edges() {
        let i = index[&edge.from];
        let j = index[&edge.to];
        if edge.weight < dist[i][j] {
            dist[i][j] = edge.weight;
            next[i][j] = Some(j);
        }
        if !graph.is_directed() && edge.weight < dist[j][i] {
            dist[j][i] = edge.weight;
            next[j][i] = Some(i);
        }
    }

    for k in 0..n {
        for i in 0..n {
            if dist[i][k].is_infinite() {
                continue;
            }
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                    next[i][j] = next[i][k];
                }
            }
        }
    }

    FloydResult {
        nodes,
        index,
        dist,
        next,
    }
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

    fn directed(n: usize, edges: &[(u64, u64, f64)]) -> Graph {
        let mut g = Graph::new(n, GraphConfig::new().weighted(true).directed(true));
        for &(u, v, w) in edges {
            g.add_edge(u, v, w).unwrap();
        }
        g
    }

    #[test]
    fn dijkstra_picks_lighter_detour() {
        // Direct 0-2 costs 10; detour through 1 costs 3.
        let g = weighted(3, &[(0, 2, 10.0), (0, 1, 1.0), (1, 2, 2.0)]);
        let path = g.dijkstra(0, 2).unwrap();

        assert_eq!(path.nodes, vec![0, 1, 2]);
        assert!((path.total_weight - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dijkstra_unreachable_is_empty() {
        let mut g = weighted(2, &[(0, 1, 1.0)]);
        g.add_node(5).unwrap();
        let path = g.dijkstra(0, 5).unwrap();
        assert!(!path.found());
    }

    #[test]
    fn dijkstra_rejects_negative_weights() {
        let g = weighted(2, &[(0, 1, -1.0)]);
        assert_eq!(
            g.dijkstra(0, 1),
            Err(GraphError::NegativeWeight {
                from: 0,
                to: 1,
                weight: -1.0
            })
        );
    }

    #[test]
    fn dijkstra_respects_direction() {
        let g = directed(2, &[(0, 1, 1.0)]);
        assert!(g.dijkstra(0, 1).unwrap().found());
        assert!(!g.dijkstra(1, 0).unwrap().found());
    }

    #[test]
    fn bellman_ford_agrees_with_dijkstra_on_nonnegative() {
        let g = weighted(
            5,
            &[
                (0, 1, 2.0),
                (1, 2, 3.0),
                (0, 3, 6.0),
                (3, 4, 1.0),
                (2, 4, 1.0),
            ],
        );
        let bf = g.bellman_ford(0, 4).unwrap();
        let dj = g.dijkstra(0, 4).unwrap();

        assert!((bf.total_weight - dj.total_weight).abs() < f64::EPSILON);
        assert_eq!(bf.nodes, dj.nodes);
    }

    #[test]
    fn bellman_ford_handles_negative_edges() {
        let g = directed(3, &[(0, 1, 4.0), (1, 2, -2.0), (0, 2, 3.0)]);
        let path = g.bellman_ford(0, 2).unwrap();

        assert_eq!(path.nodes, vec![0, 1, 2]);
        assert!((path.total_weight - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bellman_ford_detects_negative_cycle() {
        let g = directed(3, &[(0, 1, 1.0), (1, 2, -3.0), (2, 1, 1.0)]);
        assert_eq!(g.bellman_ford(0, 2), Err(GraphError::NegativeCycle));
    }

    #[test]
    fn bellman_ford_ignores_unreachable_negative_cycle() {
        // Cycle 2 <-> 3 is negative but not reachable from 0.
        let g = directed(4, &[(0, 1, 1.0), (2, 3, -3.0), (3, 2, 1.0)]);
        let path = g.bellman_ford(0, 1).unwrap();
        assert_eq!(path.nodes, vec![0, 1]);
    }

    #[test]
    fn floyd_matches_dijkstra_per_pair() {
        let g = weighted(
            4,
            &[(0, 1, 5.0), (1, 2, 2.0), (2, 3, 4.0), (0, 3, 20.0), (0, 2, 9.0)],
        );
        let all_pairs = g.floyd();

        for &from in &[0u64, 1, 2, 3] {
            for &to in &[0u64, 1, 2, 3] {
                let dj = g.dijkstra(from, to).unwrap();
                match all_pairs.distance(from, to) {
                    Some(d) => assert!((d - dj.total_weight).abs() < f64::EPSILON),
                    None => assert!(!dj.found()),
                }
            }
        }
    }

    #[test]
    fn floyd_reconstructs_paths() {
        let g = directed(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);
        let all_pairs = g.floyd();

        assert_eq!(all_pairs.path(0, 2), vec![0, 1, 2]);
        assert_eq!(all_pairs.path(2, 2), vec![2]);
        assert!(all_pairs.path(2, 0).is_empty());
        assert_eq!(all_pairs.distance(2, 0), None);
    }

    #[test]
    fn source_equals_destination() {
        let g = weighted(2, &[(0, 1, 1.0)]);
        let path = g.dijkstra(0, 0).unwrap();
        assert_eq!(path.nodes, vec![0]);
        assert!((path.total_weight).abs() < f64::EPSILON);

        let bf = g.bellman_ford(1, 1).unwrap();
        assert_eq!(bf.nodes, vec![1]);
    }
}
