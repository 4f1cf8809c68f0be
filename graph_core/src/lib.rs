//! Adjacency-list graph component.
//!
//! A [`Graph`] owns an ordered node sequence and one edge list per node;
//! edge-list views are derived by iteration rather than kept as a second
//! synchronized representation. Algorithms (traversal, spanning
//! structures, MST, shortest paths, adjacency-matrix export) are free
//! functions over the [`GraphView`] capability trait, with convenience
//! methods on `Graph` mirroring them.

// Pedantic lint configuration for graph_core
#![allow(clippy::missing_errors_doc)] // Error conditions are self-evident from Result types
#![allow(clippy::uninlined_format_args)] // Keep format strings readable
#![allow(clippy::module_name_repetitions)]

use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

pub mod algorithms;
mod config;
mod error;
mod min_heap;
mod traversal;
mod union_find;


pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use min_heap::MinHeap;
pub use traversal::{bfs, bfs_path, dfs, dfs_path, BfsIter, DfsIter};
pub use union_find::UnionFind;

use algorithms::{BiconnectedResult, FloydResult, WeightedPath};
use sparse_matrix::{LinkedSparseMatrix, SparseMatrix};

/// A weighted edge. In an unweighted graph every stored weight is `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: u64,
    pub to: u64,
    pub weight: f64,
}

impl Edge {
    /// The endpoint opposite `id`. For a self loop returns `id`.
    #[must_use]
    pub const fn other(&self, id: u64) -> u64 {
        if self.from == id {
            self.to
        } else {
            self.from
        }
    }
}

/// Read capability surface the algorithm routines operate against.
///
/// Implemented by [`Graph`]; tests can implement it on small synthetic
/// fixtures without the full mutation machinery.
pub trait GraphView {
    /// Node IDs in insertion order.
    fn node_ids(&self) -> Vec<u64>;

    /// Whether the node exists.
    fn contains_node(&self, id: u64) -> bool;

    /// `(neighbor, weight)` pairs in edge-insertion order. Empty for an
    /// absent node. Directed graphs yield out-neighbors only.
    fn neighbors(&self, id: u64) -> Vec<(u64, f64)>;

    /// Every logical edge exactly once, in deterministic order.
    fn edges(&self) -> Vec<Edge>;

    fn is_directed(&self) -> bool;
}

/// Weighted or unweighted, directed or undirected graph over integer
/// node IDs.
///
/// Undirected edges are recorded in both endpoints' lists with their
/// original orientation but count as one logical edge everywhere.
/// Parallel edges between the same ordered pair accumulate as distinct
/// entries.
#[derive(Debug, Clone)]
pub struct Graph {
    config: GraphConfig,
    /// Node IDs in insertion order.
    nodes: Vec<u64>,
    /// id -> slot in `nodes` / `adjacency`.
    slots: HashMap<u64, usize>,
    /// Per-node edge lists, parallel to `nodes`.
    adjacency: Vec<Vec<Edge>>,
    /// Logical edge count (undirected edges counted once).
    edge_count: usize,
}

impl Graph {
    /// Graph with nodes `0..n-1` and no edges.
    #[must_use]
    pub fn new(n: usize, config: GraphConfig) -> Self {
        let nodes: Vec<u64> = (0..n as u64).collect();
        let slots = nodes.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        Self {
            config,
            adjacency: vec![Vec::new(); nodes.len()],
            slots,
            nodes,
            edge_count: 0,
        }
    }

    /// Graph over an explicit node-ID list.
    ///
    /// Fails with [`GraphError::DuplicateNode`] if the list repeats an ID.
    pub fn with_nodes(ids: &[u64], config: GraphConfig) -> Result<Self> {
        let mut graph = Self::new(0, config);
        for &id in ids {
            graph.add_node(id)?;
        }
        Ok(graph)
    }

    #[must_use]
    pub const fn config(&self) -> GraphConfig {
        self.config
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Logical edge count; an undirected edge is never counted twice.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn contains_node(&self, id: u64) -> bool {
        self.slots.contains_key(&id)
    }

    /// Node IDs in insertion order.
    #[must_use]
    pub fn node_ids(&self) -> Vec<u64> {
        self.nodes.clone()
    }

    /// Append a node with an empty edge list.
    pub fn add_node(&mut self, id: u64) -> Result<()> {
        if self.slots.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        self.slots.insert(id, self.nodes.len());
        self.nodes.push(id);
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Remove a node, cascading over every incident edge first.
    #[instrument(skip(self))]
    pub fn remove_node(&mut self, id: u64) -> Result<()> {
        let slot = *self.slots.get(&id).ok_or(GraphError::NodeNotFound(id))?;

        // Own list holds every incident edge once (undirected) or every
        // out-edge (directed); in-edges of a directed node live in their
        // source's list.
        let directed = self.config.directed;
        let own = self.adjacency[slot].len();
        let mut removed = own;
        for (i, list) in self.adjacency.iter_mut().enumerate() {
            if i == slot {
                continue;
            }
            let before = list.len();
            list.retain(|e| e.from != id && e.to != id);
            if directed {
                removed += before - list.len();
            }
        }
        self.edge_count -= removed;

        self.adjacency.remove(slot);
        self.nodes.remove(slot);
        self.slots.remove(&id);
        for (i, &n) in self.nodes.iter().enumerate().skip(slot) {
            self.slots.insert(n, i);
        }

        debug!(node = id, removed_edges = removed, "removed node");
        Ok(())
    }

    /// Add an edge. The weight is forced to `1.0` when the graph is
    /// unweighted. Both endpoints must already exist.
    #[instrument(skip(self))]
    pub fn add_edge(&mut self, from: u64, to: u64, weight: f64) -> Result<()> {
        let from_slot = *self.slots.get(&from).ok_or(GraphError::NodeNotFound(from))?;
        let to_slot = *self.slots.get(&to).ok_or(GraphError::NodeNotFound(to))?;

        let weight = if self.config.weighted { weight } else { 1.0 };
        let edge = Edge { from, to, weight };

        self.adjacency[from_slot].push(edge);
        if !self.config.directed && from != to {
            self.adjacency[to_slot].push(edge);
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Remove the first-inserted edge matching `(from, to)`, respecting
    /// direction. Silent no-op when no such edge exists; absent endpoints
    /// still fail with [`GraphError::NodeNotFound`].
    pub fn remove_edge(&mut self, from: u64, to: u64) -> Result<()> {
        let from_slot = *self.slots.get(&from).ok_or(GraphError::NodeNotFound(from))?;
        let to_slot = *self.slots.get(&to).ok_or(GraphError::NodeNotFound(to))?;

        if self.config.directed {
            if let Some(idx) = self.adjacency[from_slot].iter().position(|e| e.to == to) {
                self.adjacency[from_slot].remove(idx);
                self.edge_count -= 1;
            }
            return Ok(());
        }

        if let Some(idx) = self.adjacency[from_slot]
            .iter()
            .position(|e| e.other(from) == to)
        {
            let edge = self.adjacency[from_slot].remove(idx);
            if from != to {
                // Entries are appended to both lists together, so the
                // first match in the mirror list is the same edge.
                if let Some(mirror) = self.adjacency[to_slot].iter().position(|e| {
                    e.from == edge.from
                        && e.to == edge.to
                        && e.weight.to_bits() == edge.weight.to_bits()
                }) {
                    self.adjacency[to_slot].remove(mirror);
                }
            }
            self.edge_count -= 1;
        }
        Ok(())
    }

    /// Count of incident edges. Directed graphs report out-degree plus
    /// in-degree.
    pub fn degree(&self, id: u64) -> Result<usize> {
        let slot = *self.slots.get(&id).ok_or(GraphError::NodeNotFound(id))?;
        if self.config.directed {
            let out = self.adjacency[slot].len();
            let inn = self
                .adjacency
                .iter()
                .flatten()
                .filter(|e| e.to == id)
                .count();
            Ok(out + inn)
        } else {
            Ok(self.adjacency[slot].len())
        }
    }

    /// Whether an edge `(from, to)` exists, matching symmetrically for
    /// undirected graphs. Absent endpoints simply yield `false`.
    #[must_use]
    pub fn exists_edge(&self, from: u64, to: u64) -> bool {
        let Some(&slot) = self.slots.get(&from) else {
            return false;
        };
        if self.config.directed {
            self.adjacency[slot].iter().any(|e| e.to == to)
        } else {
            self.adjacency[slot].iter().any(|e| e.other(from) == to)
        }
    }

    /// Weight of the first-inserted edge `(from, to)`, if any.
    #[must_use]
    pub fn weight(&self, from: u64, to: u64) -> Option<f64> {
        let &slot = self.slots.get(&from)?;
        if self.config.directed {
            self.adjacency[slot]
                .iter()
                .find(|e| e.to == to)
                .map(|e| e.weight)
        } else {
            self.adjacency[slot]
                .iter()
                .find(|e| e.other(from) == to)
                .map(|e| e.weight)
        }
    }

    /// Every logical edge exactly once: grouped by the from-endpoint's
    /// node slot, insertion order within each list.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut out = Vec::with_capacity(self.edge_count);
        for (slot, &node) in self.nodes.iter().enumerate() {
            for e in &self.adjacency[slot] {
                if self.config.directed || e.from == node {
                    out.push(*e);
                }
            }
        }
        out
    }

    /// Sum of logical edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges().iter().map(|e| e.weight).sum()
    }

    /// Copy with the same config and node set but only the given edges.
    /// Endpoints of every edge must already be nodes of `self`.
    #[must_use]
    pub(crate) fn subgraph_with_edges(&self, edges: &[Edge]) -> Self {
        let mut sub = Self {
            config: self.config,
            nodes: self.nodes.clone(),
            slots: self.slots.clone(),
            adjacency: vec![Vec::new(); self.nodes.len()],
            edge_count: 0,
        };
        for e in edges {
            // Endpoints come from self, so this cannot fail.
            sub.add_edge(e.from, e.to, e.weight).ok();
        }
        sub
    }

    /// Parse `{u, v, w}` triples (the [`fmt::Display`] format) and add
    /// them as edges. Endpoints not yet present are added as nodes.
    /// Returns the number of edges added.
    pub fn read_edges(&mut self, input: &str) -> Result<usize> {
        let mut added = 0;
        let mut rest = input.trim_start();
        while !rest.is_empty() {
            let Some(after_brace) = rest.strip_prefix('{') else {
                return Err(GraphError::ParseError(preview(rest)));
            };
            let Some(end) = after_brace.find('}') else {
                return Err(GraphError::ParseError(preview(rest)));
            };
            let body = &after_brace[..end];
            let parts: Vec<&str> = body.split(',').map(str::trim).collect();
            if parts.len() != 3 {
                return Err(GraphError::ParseError(body.to_string()));
            }
            let from = parts[0]
                .parse::<u64>()
                .map_err(|_| GraphError::ParseError(body.to_string()))?;
            let to = parts[1]
                .parse::<u64>()
                .map_err(|_| GraphError::ParseError(body.to_string()))?;
            let weight = parts[2]
                .parse::<f64>()
                .map_err(|_| GraphError::ParseError(body.to_string()))?;

            if !self.contains_node(from) {
                self.add_node(from)?;
            }
            if !self.contains_node(to) {
                self.add_node(to)?;
            }
            self.add_edge(from, to, weight)?;
            added += 1;

            rest = after_brace[end + 1..].trim_start();
        }
        debug!(edges = added, "parsed edge list");
        Ok(added)
    }

    /// Logical edges as orientation-canonical triples for comparison.
    fn canonical_edges(&self) -> Vec<(u64, u64, u64)> {
        let mut canon: Vec<(u64, u64, u64)> = self
            .edges()
            .iter()
            .map(|e| {
                let (a, b) = if self.config.directed || e.from <= e.to {
                    (e.from, e.to)
                } else {
                    (e.to, e.from)
                };
                (a, b, e.weight.to_bits())
            })
            .collect();
        canon.sort_unstable();
        canon
    }
}

impl GraphView for Graph {
    fn node_ids(&self) -> Vec<u64> {
        self.node_ids()
    }

    fn contains_node(&self, id: u64) -> bool {
        self.contains_node(id)
    }

    fn neighbors(&self, id: u64) -> Vec<(u64, f64)> {
        let Some(&slot) = self.slots.get(&id) else {
            return Vec::new();
        };
        if self.config.directed {
            self.adjacency[slot]
                .iter()
                .map(|e| (e.to, e.weight))
                .collect()
        } else {
            self.adjacency[slot]
                .iter()
                .map(|e| (e.other(id), e.weight))
                .collect()
        }
    }

    fn edges(&self) -> Vec<Edge> {
        self.edges()
    }

    fn is_directed(&self) -> bool {
        self.config.directed
    }
}

/// Same config, same node set, same logical edge multiset
/// (orientation-insensitive when undirected).
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        if self.config != other.config {
            return false;
        }
        let mine: HashSet<u64> = self.nodes.iter().copied().collect();
        let theirs: HashSet<u64> = other.nodes.iter().copied().collect();
        mine == theirs && self.canonical_edges() == other.canonical_edges()
    }
}

/// Edge list as space-separated `{u, v, w}` triples, one per logical
/// edge. Round-trips through [`Graph::read_edges`].
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.edges().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{{{}, {}, {}}}", e.from, e.to, e.weight)?;
        }
        Ok(())
    }
}

fn preview(input: &str) -> String {
    input.chars().take(32).collect()
}

// Convenience wrappers over the free algorithm functions.
impl Graph {
    /// Full BFS visitation order from `start`.
    pub fn bfs(&self, start: u64) -> Result<Vec<u64>> {
        traversal::bfs(self, start)
    }

    /// Minimum-hop path from `start` to `dest`; empty if unreachable.
    pub fn bfs_path(&self, start: u64, dest: u64) -> Result<Vec<u64>> {
        traversal::bfs_path(self, start, dest)
    }

    /// Full DFS visitation order from `start`.
    pub fn dfs(&self, start: u64) -> Result<Vec<u64>> {
        traversal::dfs(self, start)
    }

    /// Some valid path from `start` to `dest` (not necessarily shortest);
    /// empty if unreachable.
    pub fn dfs_path(&self, start: u64, dest: u64) -> Result<Vec<u64>> {
        traversal::dfs_path(self, start, dest)
    }

    /// Lazy BFS over the component reachable from `start`.
    pub fn bfs_iter(&self, start: u64) -> Result<BfsIter<'_, Self>> {
        if !self.contains_node(start) {
            return Err(GraphError::NodeNotFound(start));
        }
        Ok(BfsIter::new(self, start))
    }

    /// Lazy DFS over the component reachable from `start`.
    pub fn dfs_iter(&self, start: u64) -> Result<DfsIter<'_, Self>> {
        if !self.contains_node(start) {
            return Err(GraphError::NodeNotFound(start));
        }
        Ok(DfsIter::new(self, start))
    }

    /// BFS spanning tree (forest on disconnected input), as a new graph
    /// over the same node set.
    #[must_use]
    pub fn spanning_tree(&self) -> Self {
        self.subgraph_with_edges(&algorithms::spanning_forest(self))
    }

    /// Connected components as node-ID lists (reachability-based for
    /// directed graphs).
    #[must_use]
    pub fn components(&self) -> Vec<Vec<u64>> {
        algorithms::components(self)
    }

    /// Biconnected components, articulation points, and bridges.
    #[must_use]
    pub fn biconnected_components(&self) -> BiconnectedResult {
        algorithms::biconnected_components(self)
    }

    /// Kruskal MST (forest on disconnected input) as a new graph.
    #[must_use]
    pub fn kruskal(&self) -> Self {
        self.subgraph_with_edges(&algorithms::kruskal(self).edges)
    }

    /// Prim MST grown from `start`, spanning its component only.
    pub fn prim(&self, start: u64) -> Result<Self> {
        Ok(self.subgraph_with_edges(&algorithms::prim(self, start)?.edges))
    }

    /// Sollin (Borůvka) MST (forest on disconnected input) as a new graph.
    #[must_use]
    pub fn sollin(&self) -> Self {
        self.subgraph_with_edges(&algorithms::sollin(self).edges)
    }

    /// Non-negative-weight shortest path from `source` to `dest`.
    pub fn dijkstra(&self, source: u64, dest: u64) -> Result<WeightedPath> {
        algorithms::dijkstra(self, source, dest)
    }

    /// Shortest path tolerating negative weights; fails with
    /// [`GraphError::NegativeCycle`] on a reachable negative cycle.
    pub fn bellman_ford(&self, source: u64, dest: u64) -> Result<WeightedPath> {
        algorithms::bellman_ford(self, source, dest)
    }

    /// All-pairs shortest distances with path reconstruction.
    #[must_use]
    pub fn floyd(&self) -> FloydResult {
        algorithms::floyd(self)
    }

    /// Array-backed sparse adjacency matrix; rows/cols follow node
    /// insertion order.
    #[must_use]
    pub fn adjacency_matrix(&self) -> SparseMatrix {
        algorithms::adjacency_matrix(self)
    }

    /// Linked sparse adjacency matrix with the same contents.
    #[must_use]
    pub fn adjacency_matrix_linked(&self) -> LinkedSparseMatrix {
        algorithms::adjacency_matrix_linked(self)
    }
}
