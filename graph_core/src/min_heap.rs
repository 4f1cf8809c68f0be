//! Indexed binary min-heap keyed by `f64` priority.
//!
//! Supports `decrease_key`, which the Prim and Dijkstra routines use to
//! reprioritize frontier nodes in place instead of pushing stale
//! duplicates.

use std::collections::HashMap;

/// Min-heap over `u64` items with `f64` priorities.
#[derive(Debug, Clone, Default)]
pub struct MinHeap {
    /// (item, priority) pairs in heap order.
    heap: Vec<(u64, f64)>,
    /// item -> slot in `heap`.
    pos: HashMap<u64, usize>,
}

impl MinHeap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn contains(&self, item: u64) -> bool {
        self.pos.contains_key(&item)
    }

    /// Current priority of `item`, if queued.
    #[must_use]
    pub fn priority(&self, item: u64) -> Option<f64> {
        self.pos.get(&item).map(|&slot| self.heap[slot].1)
    }

    /// Insert `item`, or lower its priority if already queued with a
    /// larger one. Returns `true` if the heap changed.
    pub fn push(&mut self, item: u64, priority: f64) -> bool {
        if let Some(&slot) = self.pos.get(&item) {
            if priority < self.heap[slot].1 {
                self.heap[slot].1 = priority;
                self.sift_up(slot);
                return true;
            }
            return false;
        }
        let slot = self.heap.len();
        self.heap.push((item, priority));
        self.pos.insert(item, slot);
        self.sift_up(slot);
        true
    }

    /// Lower the priority of a queued item. Returns `false` if the item
    /// is not queued or the new priority is not smaller.
    pub fn decrease_key(&mut self, item: u64, priority: f64) -> bool {
        match self.pos.get(&item) {
            Some(&slot) if priority < self.heap[slot].1 => {
                self.heap[slot].1 = priority;
                self.sift_up(slot);
                true
            },
            _ => false,
        }
    }

    /// Remove and return the minimum-priority item.
    pub fn pop(&mut self) -> Option<(u64, f64)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let (item, priority) = self.heap.pop().unwrap_or_default();
        self.pos.remove(&item);
        if !self.heap.is_empty() {
            self.pos.insert(self.heap[0].0, 0);
            self.sift_down(0);
        }
        Some((item, priority))
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].1 >= self.heap[parent].1 {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;
            if left < self.heap.len() && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos.insert(self.heap[a].0, a);
        self.pos.insert(self.heap[b].0, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_priority_order() {
        let mut heap = MinHeap::new();
        heap.push(10, 5.0);
        heap.push(20, 1.0);
        heap.push(30, 3.0);

        assert_eq!(heap.pop(), Some((20, 1.0)));
        assert_eq!(heap.pop(), Some((30, 3.0)));
        assert_eq!(heap.pop(), Some((10, 5.0)));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn decrease_key_reorders() {
        let mut heap = MinHeap::new();
        heap.push(1, 10.0);
        heap.push(2, 20.0);

        assert!(heap.decrease_key(2, 5.0));
        assert_eq!(heap.pop(), Some((2, 5.0)));
    }

    #[test]
    fn decrease_key_rejects_increase() {
        let mut heap = MinHeap::new();
        heap.push(1, 1.0);

        assert!(!heap.decrease_key(1, 2.0));
        assert!(!heap.decrease_key(99, 0.0));
        assert_eq!(heap.priority(1), Some(1.0));
    }

    #[test]
    fn push_lowers_existing_priority() {
        let mut heap = MinHeap::new();
        heap.push(7, 9.0);
        assert!(heap.push(7, 4.0));
        assert!(!heap.push(7, 6.0));

        assert_eq!(heap.len(), 1);
        assert_eq!(heap.pop(), Some((7, 4.0)));
    }

    #[test]
    fn interleaved_operations() {
        let mut heap = MinHeap::new();
        for (item, priority) in [(1, 9.0), (2, 8.0), (3, 7.0), (4, 6.0), (5, 5.0)] {
            heap.push(item, priority);
        }
        assert_eq!(heap.pop(), Some((5, 5.0)));

        heap.decrease_key(1, 0.5);
        assert_eq!(heap.pop(), Some((1, 0.5)));
        assert_eq!(heap.pop(), Some((4, 6.0)));
        assert!(heap.contains(2));
        assert_eq!(heap.len(), 2);
    }
}
