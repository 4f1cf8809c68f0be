//! Sparse matrix representations.
//!
//! Two interchangeable representations of the same abstraction:
//! - [`SparseMatrix`]: a row-major sorted triplet (row, col, value) array.
//! - [`LinkedSparseMatrix`]: per-row term lists, cheaper for row-local edits.
//!
//! A stored value of exactly `0.0` is never kept; setting a term to zero
//! removes it.

#![allow(clippy::missing_errors_doc)] // Error conditions are self-evident from Result types
#![allow(clippy::uninlined_format_args)] // Keep format strings readable

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// A single nonzero term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

/// Array-backed sparse matrix: triplets kept sorted row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    terms: Vec<Term>,
}

impl SparseMatrix {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            terms: Vec::new(),
        }
    }

    /// Build from an unsorted triplet list. Later duplicates overwrite
    /// earlier ones.
    #[must_use]
    pub fn from_triplets(rows: usize, cols: usize, triplets: &[(usize, usize, f64)]) -> Self {
        let mut matrix = Self::new(rows, cols);
        for &(row, col, value) in triplets {
            matrix.set(row, col, value);
        }
        matrix
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn nonzero_count(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Set the term at (row, col). A value of `0.0` removes the term.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(
            row < self.rows && col < self.cols,
            "position ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        let key = (row, col);
        match self.terms.binary_search_by_key(&key, |t| (t.row, t.col)) {
            Ok(idx) => {
                if value == 0.0 {
                    self.terms.remove(idx);
                } else {
                    self.terms[idx].value = value;
                }
            },
            Err(idx) => {
                if value != 0.0 {
                    self.terms.insert(idx, Term { row, col, value });
                }
            },
        }
    }

    /// Value at (row, col), or `None` for a zero (absent) term.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.terms
            .binary_search_by_key(&(row, col), |t| (t.row, t.col))
            .ok()
            .map(|idx| self.terms[idx].value)
    }

    /// Row-major iteration over nonzero terms.
    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    /// Transposed copy.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut terms: Vec<Term> = self
            .terms
            .iter()
            .map(|t| Term {
                row: t.col,
                col: t.row,
                value: t.value,
            })
            .collect();
        terms.sort_by_key(|t| (t.row, t.col));
        Self {
            rows: self.cols,
            cols: self.rows,
            terms,
        }
    }

    /// Contents as a row-major triplet list.
    #[must_use]
    pub fn to_triplets(&self) -> Vec<(usize, usize, f64)> {
        self.terms.iter().map(|t| (t.row, t.col, t.value)).collect()
    }
}

/// Linked sparse matrix: one column-sorted term list per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedSparseMatrix {
    rows: usize,
    cols: usize,
    row_lists: Vec<VecDeque<(usize, f64)>>,
}

impl LinkedSparseMatrix {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            row_lists: vec![VecDeque::new(); rows],
        }
    }

    #[must_use]
    pub fn from_triplets(rows: usize, cols: usize, triplets: &[(usize, usize, f64)]) -> Self {
        let mut matrix = Self::new(rows, cols);
        for &(row, col, value) in triplets {
            matrix.set(row, col, value);
        }
        matrix
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn nonzero_count(&self) -> usize {
        self.row_lists.iter().map(VecDeque::len).sum()
    }

    /// Set the term at (row, col). A value of `0.0` removes the term.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(
            row < self.rows && col < self.cols,
            "position ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        let list = &mut self.row_lists[row];
        match list.iter().position(|&(c, _)| c >= col) {
            Some(idx) if list[idx].0 == col => {
                if value == 0.0 {
                    list.remove(idx);
                } else {
                    list[idx].1 = value;
                }
            },
            Some(idx) => {
                if value != 0.0 {
                    list.insert(idx, (col, value));
                }
            },
            None => {
                if value != 0.0 {
                    list.push_back((col, value));
                }
            },
        }
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.row_lists.get(row)?.iter().find_map(
            |&(c, v)| {
                if c == col {
                    Some(v)
                } else {
                    None
                }
            },
        )
    }

    /// Contents as a row-major triplet list.
    #[must_use]
    pub fn to_triplets(&self) -> Vec<(usize, usize, f64)> {
        let mut triplets = Vec::new();
        for (row, list) in self.row_lists.iter().enumerate() {
            for &(col, value) in list {
                triplets.push((row, col, value));
            }
        }
        triplets
    }

    /// Convert to the array-backed representation.
    #[must_use]
    pub fn to_array(&self) -> SparseMatrix {
        SparseMatrix::from_triplets(self.rows, self.cols, &self.to_triplets())
    }
}

impl From<&SparseMatrix> for LinkedSparseMatrix {
    fn from(m: &SparseMatrix) -> Self {
        Self::from_triplets(m.rows(), m.cols(), &m.to_triplets())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut m = SparseMatrix::new(3, 3);
        m.set(0, 1, 2.5);
        m.set(2, 0, -1.0);

        assert_eq!(m.get(0, 1), Some(2.5));
        assert_eq!(m.get(2, 0), Some(-1.0));
        assert_eq!(m.get(1, 1), None);
        assert_eq!(m.nonzero_count(), 2);
    }

    #[test]
    fn overwrite_keeps_one_term() {
        let mut m = SparseMatrix::new(2, 2);
        m.set(0, 0, 1.0);
        m.set(0, 0, 3.0);

        assert_eq!(m.get(0, 0), Some(3.0));
        assert_eq!(m.nonzero_count(), 1);
    }

    #[test]
    fn zero_removes_term() {
        let mut m = SparseMatrix::new(2, 2);
        m.set(1, 1, 4.0);
        m.set(1, 1, 0.0);

        assert_eq!(m.get(1, 1), None);
        assert!(m.is_empty());
    }

    #[test]
    fn iteration_is_row_major() {
        let mut m = SparseMatrix::new(3, 3);
        m.set(2, 0, 3.0);
        m.set(0, 2, 1.0);
        m.set(1, 1, 2.0);

        let order: Vec<(usize, usize)> = m.iter().map(|t| (t.row, t.col)).collect();
        assert_eq!(order, vec![(0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn transpose_roundtrip() {
        let m = SparseMatrix::from_triplets(2, 3, &[(0, 2, 1.0), (1, 0, 2.0)]);
        let t = m.transpose();

        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 2);
        assert_eq!(t.get(2, 0), Some(1.0));
        assert_eq!(t.get(0, 1), Some(2.0));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn set_out_of_range_panics() {
        let mut m = SparseMatrix::new(2, 2);
        m.set(2, 0, 1.0);
    }

    #[test]
    fn linked_set_and_get() {
        let mut m = LinkedSparseMatrix::new(3, 3);
        m.set(0, 2, 1.5);
        m.set(0, 0, 0.5);
        m.set(2, 1, 2.0);

        assert_eq!(m.get(0, 0), Some(0.5));
        assert_eq!(m.get(0, 2), Some(1.5));
        assert_eq!(m.get(1, 0), None);
        assert_eq!(m.nonzero_count(), 3);

        // Row lists stay column-sorted
        assert_eq!(
            m.to_triplets(),
            vec![(0, 0, 0.5), (0, 2, 1.5), (2, 1, 2.0)]
        );
    }

    #[test]
    fn linked_zero_removes_term() {
        let mut m = LinkedSparseMatrix::new(2, 2);
        m.set(0, 1, 9.0);
        m.set(0, 1, 0.0);
        assert_eq!(m.nonzero_count(), 0);
    }

    #[test]
    fn representations_agree() {
        let triplets = [(0, 1, 1.0), (1, 2, 2.0), (2, 0, 3.0), (1, 0, 4.0)];
        let array = SparseMatrix::from_triplets(3, 3, &triplets);
        let linked = LinkedSparseMatrix::from_triplets(3, 3, &triplets);

        assert_eq!(array.to_triplets(), linked.to_triplets());
        assert_eq!(linked.to_array(), array);
        assert_eq!(LinkedSparseMatrix::from(&array), linked);
    }
}
