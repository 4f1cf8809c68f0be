//! Spanning forest and connected components via BFS.

use std::collections::{HashSet, VecDeque};

use crate::{Edge, GraphView};

/// Edges of a BFS spanning forest: each component contributes the tree
/// edges discovered from its first unvisited node, in node-insertion
/// order.
pub fn spanning_forest<G: GraphView>(graph: &G) -> Vec<Edge> {
    let mut visited = HashSet::new();
    let mut tree_edges = Vec::new();

    for root in graph.node_ids() {
        if !visited.insert(root) {
            continue;
        }
        let mut queue = VecDeque::new();
        queue.push_back(root);
        while let Some(current) = queue.pop_front() {
            for (neighbor, weight) in graph.neighbors(current) {
                if visited.insert(neighbor) {
                    tree_edges.push(Edge {
                        from: current,
                        to: neighbor,
                        weight,
                    });
                    queue.push_back(neighbor);
                }
            }
        }
    }

    tree_edges
}

/// Partition of the node set by repeated BFS from unvisited nodes.
/// Component sizes always sum to the node count. For directed graphs the
/// grouping follows out-edge reachability.
pub fn components<G: GraphView>(graph: &G) -> Vec<Vec<u64>> {
    let mut visited = HashSet::new();
    let mut all = Vec::new();

    for root in graph.node_ids() {
        if !visited.insert(root) {
            continue;
        }
        let mut component = vec![root];
        let mut queue = VecDeque::new();
        queue.push_back(root);
        while let Some(current) = queue.pop_front() {
            for (neighbor, _) in graph.neighbors(current) {
                if visited.insert(neighbor) {
                    component.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }
        all.push(component);
    }

    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Graph, GraphConfig};

    #[test]
    fn spanning_tree_of_connected_graph() {
        let mut g = Graph::new(4, GraphConfig::new());
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();
        g.add_edge(3, 0, 1.0).unwrap();

        let tree = g.spanning_tree();
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.edge_count(), 3);
        assert_eq!(tree.components().len(), 1);
    }

    #[test]
    fn disconnected_graph_yields_forest() {
        let mut g = Graph::new(5, GraphConfig::new());
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();
        // node 4 isolated

        let forest = spanning_forest(&g);
        assert_eq!(forest.len(), 2);

        let tree = g.spanning_tree();
        assert_eq!(tree.components().len(), 3);
    }

    #[test]
    fn components_partition_the_nodes() {
        let mut g = Graph::new(6, GraphConfig::new());
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(3, 4, 1.0).unwrap();

        let comps = g.components();
        assert_eq!(comps.len(), 3);
        let total: usize = comps.iter().map(Vec::len).sum();
        assert_eq!(total, g.node_count());
        assert_eq!(comps[0], vec![0, 1, 2]);
        assert_eq!(comps[1], vec![3, 4]);
        assert_eq!(comps[2], vec![5]);
    }

    #[test]
    fn empty_graph_has_no_components() {
        let g = Graph::new(0, GraphConfig::new());
        assert!(g.components().is_empty());
        assert!(spanning_forest(&g).is_empty());
    }
}
