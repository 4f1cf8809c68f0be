//! Breadth-first and depth-first traversal.
//!
//! Neighbors are visited in edge-insertion order, so every traversal is
//! deterministic for a given construction history. Path variants return
//! an empty sequence for an unreachable destination.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::{GraphError, GraphView, Result};

/// Full BFS visitation order from `start`, covering only the reachable
/// component.
pub fn bfs<G: GraphView>(graph: &G, start: u64) -> Result<Vec<u64>> {
    if !graph.contains_node(start) {
        return Err(GraphError::NodeNotFound(start));
    }

    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    queue.push_back(start);
    visited.insert(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for (neighbor, _) in graph.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    Ok(order)
}

/// Minimum-hop path from `start` to `dest` as a node sequence; empty if
/// `dest` is unreachable.
pub fn bfs_path<G: GraphView>(graph: &G, start: u64, dest: u64) -> Result<Vec<u64>> {
    if !graph.contains_node(start) {
        return Err(GraphError::NodeNotFound(start));
    }
    if !graph.contains_node(dest) {
        return Err(GraphError::NodeNotFound(dest));
    }
    if start == dest {
        return Ok(vec![start]);
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut parent: HashMap<u64, u64> = HashMap::new();

    queue.push_back(start);
    visited.insert(start);

    while let Some(current) = queue.pop_front() {
        for (neighbor, _) in graph.neighbors(current) {
            if visited.insert(neighbor) {
                parent.insert(neighbor, current);
                if neighbor == dest {
                    return Ok(reconstruct(start, dest, &parent));
                }
                queue.push_back(neighbor);
            }
        }
    }

    Ok(Vec::new())
}

/// Full DFS visitation order from `start`. Uses an explicit stack;
/// neighbors are pushed in reverse so the first-inserted edge is
/// explored first.
pub fn dfs<G: GraphView>(graph: &G, start: u64) -> Result<Vec<u64>> {
    if !graph.contains_node(start) {
        return Err(GraphError::NodeNotFound(start));
    }

    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current);
        for (neighbor, _) in graph.neighbors(current).into_iter().rev() {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    Ok(order)
}

/// Some valid path from `start` to `dest` found depth-first; empty if
/// unreachable. Not necessarily hop-minimal.
pub fn dfs_path<G: GraphView>(graph: &G, start: u64, dest: u64) -> Result<Vec<u64>> {
    if !graph.contains_node(start) {
        return Err(GraphError::NodeNotFound(start));
    }
    if !graph.contains_node(dest) {
        return Err(GraphError::NodeNotFound(dest));
    }
    if start == dest {
        return Ok(vec![start]);
    }

    let mut visited = HashSet::new();
    let mut parent: HashMap<u64, u64> = HashMap::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        if current == dest {
            return Ok(reconstruct(start, dest, &parent));
        }
        for (neighbor, _) in graph.neighbors(current).into_iter().rev() {
            if !visited.contains(&neighbor) {
                parent.insert(neighbor, current);
                stack.push(neighbor);
            }
        }
    }

    Ok(Vec::new())
}

fn reconstruct(start: u64, dest: u64, parent: &HashMap<u64, u64>) -> Vec<u64> {
    let mut nodes = vec![dest];
    let mut current = dest;
    while current != start {
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

/// Lazy breadth-first iterator over the component reachable from the
/// start node.
#[derive(Debug)]
pub struct BfsIter<'a, G: GraphView> {
    graph: &'a G,
    visited: HashSet<u64>,
    queue: VecDeque<u64>,
}

impl<'a, G: GraphView> BfsIter<'a, G> {
    #[must_use]
    pub fn new(graph: &'a G, start: u64) -> Self {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        if graph.contains_node(start) {
            visited.insert(start);
            queue.push_back(start);
        }
        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<G: GraphView> Iterator for BfsIter<'_, G> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.queue.pop_front()?;
        for (neighbor, _) in self.graph.neighbors(current) {
            if self.visited.insert(neighbor) {
                self.queue.push_back(neighbor);
            }
        }
        Some(current)
    }
}

/// Lazy depth-first iterator over the component reachable from the
/// start node.
#[derive(Debug)]
pub struct DfsIter<'a, G: GraphView> {
    graph: &'a G,
    visited: HashSet<u64>,
    stack: Vec<u64>,
}

impl<'a, G: GraphView> DfsIter<'a, G> {
    #[must_use]
    pub fn new(graph: &'a G, start: u64) -> Self {
        let stack = if graph.contains_node(start) {
            vec![start]
        } else {
            Vec::new()
        };
        Self {
            graph,
            visited: HashSet::new(),
            stack,
        }
    }
}

impl<G: GraphView> Iterator for DfsIter<'_, G> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while let Some(current) = self.stack.pop() {
            if !self.visited.insert(current) {
                continue;
            }
            for (neighbor, _) in self.graph.neighbors(current).into_iter().rev() {
                if !self.visited.contains(&neighbor) {
                    self.stack.push(neighbor);
                }
            }
            return Some(current);
        }
        None
    }
}
