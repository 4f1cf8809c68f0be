//! Biconnected components, articulation points, and bridges.
//!
//! Tarjan-style DFS tracking discovery time and low-link per node, with
//! an explicit edge stack popped at articulation points. Edge direction
//! is ignored; self loops do not participate.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::GraphView;

/// Result of biconnected component analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiconnectedResult {
    /// Each component as a sorted node-ID list. A cut vertex appears in
    /// every component it joins.
    pub components: Vec<Vec<u64>>,
    /// Articulation points (cut vertices), sorted.
    pub articulation_points: Vec<u64>,
    /// Bridges (cut edges) as `(min, max)` endpoint pairs.
    pub bridges: Vec<(u64, u64)>,
}

impl BiconnectedResult {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            components: Vec::new(),
            articulation_points: Vec::new(),
            bridges: Vec::new(),
        }
    }

    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_biconnected(&self) -> bool {
        self.articulation_points.is_empty() && self.components.len() <= 1
    }

    #[must_use]
    pub fn has_bridges(&self) -> bool {
        !self.bridges.is_empty()
    }
}

impl Default for BiconnectedResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Per-node neighbor entry carrying the index of the underlying edge, so
/// parallel edges and the tree edge back to the parent are told apart.
type Adjacency = HashMap<u64, Vec<(u64, usize)>>;

struct BiconnectedState {
    time: usize,
    discovery: HashMap<u64, usize>,
    low: HashMap<u64, usize>,
    articulation_points: HashSet<u64>,
    bridges: Vec<(u64, u64)>,
    /// (endpoint, endpoint, edge index); the index keeps parallel edges
    /// distinct on the stack.
    edge_stack: Vec<(u64, u64, usize)>,
    components: Vec<Vec<u64>>,
}

impl BiconnectedState {
    fn new() -> Self {
        Self {
            time: 0,
            discovery: HashMap::new(),
            low: HashMap::new(),
            articulation_points: HashSet::new(),
            bridges: Vec::new(),
            edge_stack: Vec::new(),
            components: Vec::new(),
        }
    }

    fn pop_component(&mut self, until: usize) {
        let mut nodes = HashSet::new();
        while let Some((a, b, idx)) = self.edge_stack.pop() {
            nodes.insert(a);
            nodes.insert(b);
            if idx == until {
                break;
            }
        }
        if !nodes.is_empty() {
            let mut component: Vec<u64> = nodes.into_iter().collect();
            component.sort_unstable();
            self.components.push(component);
        }
    }
}

/// Find biconnected components, articulation points, and bridges.
///
/// Time complexity: O(V + E).
pub fn biconnected_components<G: GraphView>(graph: &G) -> BiconnectedResult {
    let nodes = graph.node_ids();
    if nodes.is_empty() {
        return BiconnectedResult::empty();
    }

    // Symmetric adjacency over edge indices, self loops excluded.
    let edges = graph.edges();
    let mut adjacency: Adjacency = HashMap::new();
    for (idx, e) in edges.iter().enumerate() {
        if e.from == e.to {
            continue;
        }
        adjacency.entry(e.from).or_default().push((e.to, idx));
        adjacency.entry(e.to).or_default().push((e.from, idx));
    }

    let mut state = BiconnectedState::new();
    for &node in &nodes {
        if !state.discovery.contains_key(&node) {
            dfs(node, None, &adjacency, &mut state);
        }
    }

    let mut articulation_points: Vec<u64> = state.articulation_points.into_iter().collect();
    articulation_points.sort_unstable();

    BiconnectedResult {
        components: state.components,
        articulation_points,
        bridges: state.bridges,
    }
}

fn dfs(u: u64, parent_edge: Option<usize>, adjacency: &Adjacency, state: &mut BiconnectedState) {
    state.discovery.insert(u, state.time);
    state.low.insert(u, state.time);
    state.time += 1;

    let mut children = 0;
    let neighbors = adjacency.get(&u).cloned().unwrap_or_default();

    for (v, edge_idx) in neighbors {
        if Some(edge_idx) == parent_edge {
            continue;
        }

        if let Some(&disc_v) = state.discovery.get(&v) {
            // Back edge; pushed only from the descendant side.
            let disc_u = state.discovery[&u];
            if disc_v < disc_u {
                state.edge_stack.push((u, v, edge_idx));
                let low_u = state.low[&u];
                state.low.insert(u, low_u.min(disc_v));
            }
            continue;
        }

        children += 1;
        state.edge_stack.push((u, v, edge_idx));
        dfs(v, Some(edge_idx), adjacency, state);

        let low_v = state.low[&v];
        let low_u = state.low[&u];
        state.low.insert(u, low_u.min(low_v));

        let disc_u = state.discovery[&u];
        if low_v >= disc_u {
            // Subtree under v plus u forms a component. u cuts the graph
            // unless it is a root with a single child.
            if parent_edge.is_some() || children > 1 {
                state.articulation_points.insert(u);
            }
            state.pop_component(edge_idx);
        }
        if low_v > disc_u {
            state.bridges.push((u.min(v), u.max(v)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Graph, GraphConfig};

    fn undirected(n: usize, edges: &[(u64, u64)]) -> Graph {
        let mut g = Graph::new(n, GraphConfig::new());
        for &(u, v) in edges {
            g.add_edge(u, v, 1.0).unwrap();
        }
        g
    }

    #[test]
    fn empty_graph() {
        let g = Graph::new(0, GraphConfig::new());
        let result = g.biconnected_components();
        assert_eq!(result, BiconnectedResult::empty());
        assert!(result.is_biconnected());
    }

    #[test]
    fn path_has_inner_articulation_points() {
        let g = undirected(3, &[(0, 1), (1, 2)]);
        let result = g.biconnected_components();

        assert_eq!(result.articulation_points, vec![1]);
        assert_eq!(result.bridges.len(), 2);
        assert_eq!(result.component_count(), 2);
        assert!(result.components.contains(&vec![0, 1]));
        assert!(result.components.contains(&vec![1, 2]));
    }

    #[test]
    fn triangle_is_biconnected() {
        let g = undirected(3, &[(0, 1), (1, 2), (0, 2)]);
        let result = g.biconnected_components();

        assert!(result.articulation_points.is_empty());
        assert!(!result.has_bridges());
        assert_eq!(result.components, vec![vec![0, 1, 2]]);
        assert!(result.is_biconnected());
    }

    #[test]
    fn two_triangles_sharing_a_vertex() {
        let g = undirected(5, &[(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (2, 4)]);
        let result = g.biconnected_components();

        assert_eq!(result.articulation_points, vec![2]);
        assert!(!result.has_bridges());
        assert_eq!(result.component_count(), 2);
        // The cut vertex belongs to both components.
        assert!(result.components.iter().all(|c| c.contains(&2)));
    }

    #[test]
    fn star_center_cuts_everything() {
        let g = undirected(4, &[(0, 1), (0, 2), (0, 3)]);
        let result = g.biconnected_components();

        assert_eq!(result.articulation_points, vec![0]);
        assert_eq!(result.bridges.len(), 3);
        assert_eq!(result.component_count(), 3);
    }

    #[test]
    fn parallel_edges_form_a_cycle() {
        let mut g = Graph::new(2, GraphConfig::new().weighted(true));
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(0, 1, 2.0).unwrap();

        let result = g.biconnected_components();
        assert!(result.articulation_points.is_empty());
        assert!(!result.has_bridges());
        assert_eq!(result.component_count(), 1);
    }

    #[test]
    fn disconnected_components_analyzed_separately() {
        let g = undirected(6, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5)]);
        let result = g.biconnected_components();

        assert_eq!(result.articulation_points, vec![4]);
        assert_eq!(result.bridges.len(), 2);
        assert_eq!(result.component_count(), 3);
    }
}
