//! Hash-backed sparse integer matrix
//!
//! Only non-zero entries are stored, keyed by `(row, col)`. Every mutation
//! goes through [`SparseMatrix::set_element`], which keeps the two storage
//! invariants: no stored value is zero and every key lies inside the
//! declared dimensions.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::format::constants::DISPLAY_PREVIEW;
use crate::validation::{check_dimensions, check_index};
use crate::Result;

/// A single stored element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: i64,
}

impl Entry {
    pub const fn new(row: usize, col: usize, value: i64) -> Self {
        Self { row, col, value }
    }
}

/// Sparse matrix of signed integers
///
/// Equality is entrywise: since zeros are never materialized, two matrices
/// compare equal exactly when they have the same shape and the same
/// non-zero entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    elements: HashMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Create an empty `rows` x `cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            elements: HashMap::new(),
        }
    }

    /// Create an empty matrix from signed dimensions
    ///
    /// Fails with `InvalidDimension` if either dimension is negative.
    pub fn try_new(rows: i64, cols: i64) -> Result<Self> {
        let (rows, cols) = check_dimensions(rows, cols)?;
        Ok(Self::new(rows, cols))
    }

    /// Create the `n` x `n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        matrix.elements.reserve(n);
        for i in 0..n {
            matrix.elements.insert((i, i), 1);
        }
        matrix
    }

    /// Build a matrix from entries, skipping zero values
    ///
    /// Later entries overwrite earlier ones at the same position.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut matrix = Self::new(rows, cols);
        for entry in entries {
            matrix.set_element(entry.row, entry.col, entry.value)?;
        }
        Ok(matrix)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) elements
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    /// Fraction of positions holding a stored element
    pub fn density(&self) -> f64 {
        let total = self.rows as f64 * self.cols as f64;
        if total == 0.0 {
            0.0
        } else {
            self.nnz() as f64 / total
        }
    }

    /// True when no element is stored
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Value at `(row, col)`, or 0 when nothing is stored there
    pub fn get_element(&self, row: usize, col: usize) -> Result<i64> {
        self.check_bounds(row, col)?;
        Ok(self.value_at(row, col))
    }

    /// Store `value` at `(row, col)`; a zero value removes the entry
    pub fn set_element(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        self.check_bounds(row, col)?;
        self.store(row, col, value);
        Ok(())
    }

    /// Iterate stored entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
        self.elements
            .iter()
            .map(|(&(row, col), &value)| Entry::new(row, col, value))
    }

    /// Stored entries ordered by row, then column
    pub fn sorted_entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.iter().collect();
        entries.sort_unstable_by_key(|e| (e.row, e.col));
        entries
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        check_index(row, col, self.rows, self.cols)
    }

    /// Unchecked read for positions already known to be in bounds
    pub(crate) fn value_at(&self, row: usize, col: usize) -> i64 {
        self.elements.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Unchecked write for positions already known to be in bounds
    pub(crate) fn store(&mut self, row: usize, col: usize, value: i64) {
        if value == 0 {
            self.elements.remove(&(row, col));
        } else {
            self.elements.insert((row, col), value);
        }
    }
}

impl core::fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "SparseMatrix({}x{})", self.rows, self.cols)?;
        write!(f, "Non-zero elements: {}", self.nnz())?;

        let entries = self.sorted_entries();
        for entry in entries.iter().take(DISPLAY_PREVIEW) {
            write!(f, "\n({}, {}) = {}", entry.row, entry.col, entry.value)?;
        }
        if entries.len() > DISPLAY_PREVIEW {
            write!(
                f,
                "\n... and {} more elements",
                entries.len() - DISPLAY_PREVIEW
            )?;
        }
        Ok(())
    }
}
