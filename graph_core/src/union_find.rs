//! Disjoint-set (union-find) over arbitrary node IDs.
//!
//! Union by rank with path compression. Shared by the Kruskal and Sollin
//! MST routines for cycle detection.

use std::collections::{HashMap, HashSet};

/// Union-Find data structure keyed by node ID.
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    parent: HashMap<u64, u64>,
    rank: HashMap<u64, usize>,
}

impl UnionFind {
    /// Each node starts in its own singleton set.
    #[must_use]
    pub fn new(nodes: &[u64]) -> Self {
        let parent = nodes.iter().map(|&n| (n, n)).collect();
        let rank = nodes.iter().map(|&n| (n, 0)).collect();
        Self { parent, rank }
    }

    /// Add a node as a new singleton set; no-op if already present.
    pub fn insert(&mut self, node: u64) {
        self.parent.entry(node).or_insert(node);
        self.rank.entry(node).or_insert(0);
    }

    /// Representative of the set containing `x`, compressing the path.
    ///
    /// # Panics
    ///
    /// Panics if `x` was never inserted.
    pub fn find(&mut self, x: u64) -> u64 {
        let p = self.parent[&x];
        if p == x {
            x
        } else {
            let root = self.find(p);
            self.parent.insert(x, root);
            root
        }
    }

    /// Merge the sets containing `x` and `y`. Returns `false` if they
    /// were already the same set.
    pub fn union(&mut self, x: u64, y: u64) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        let rank_x = self.rank[&rx];
        let rank_y = self.rank[&ry];

        match rank_x.cmp(&rank_y) {
            std::cmp::Ordering::Less => {
                self.parent.insert(rx, ry);
            },
            std::cmp::Ordering::Greater => {
                self.parent.insert(ry, rx);
            },
            std::cmp::Ordering::Equal => {
                self.parent.insert(ry, rx);
                self.rank.insert(rx, rank_x + 1);
            },
        }
        true
    }

    /// Whether `x` and `y` are in the same set.
    pub fn same_set(&mut self, x: u64, y: u64) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of distinct sets.
    #[must_use]
    pub fn set_count(&mut self) -> usize {
        let nodes: Vec<u64> = self.parent.keys().copied().collect();
        let roots: HashSet<u64> = nodes.into_iter().map(|n| self.find(n)).collect();
        roots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_disjoint() {
        let mut uf = UnionFind::new(&[1, 2, 3]);
        assert!(!uf.same_set(1, 2));
        assert_eq!(uf.set_count(), 3);
    }

    #[test]
    fn union_merges_sets() {
        let mut uf = UnionFind::new(&[1, 2, 3, 4]);
        assert!(uf.union(1, 2));
        assert!(uf.union(3, 4));
        assert!(uf.union(2, 3));

        assert!(uf.same_set(1, 4));
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn union_same_set_returns_false() {
        let mut uf = UnionFind::new(&[1, 2]);
        assert!(uf.union(1, 2));
        assert!(!uf.union(2, 1));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut uf = UnionFind::default();
        uf.insert(5);
        uf.insert(6);
        uf.union(5, 6);
        uf.insert(5);

        assert!(uf.same_set(5, 6));
        assert_eq!(uf.set_count(), 1);
    }
}
