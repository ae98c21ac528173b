//! Arithmetic on sparse matrices
//!
//! Every operation borrows its operands and returns a freshly owned result.
//! Zero results are dropped as they are produced, so the storage invariant
//! holds for every returned matrix.
//!
//! # Complexity
//!
//! - `add`, `subtract`: O(n + m) in the stored entries of both operands
//! - `multiply`: O(p) to group the right operand by row, then
//!   O(n · r) where r is the average entry count of the right-operand rows
//!   addressed by left-operand columns

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::Operation;
use crate::{MatrixError, Result, SparseMatrix};

/// Check that two shapes allow element-wise `op`
pub fn check_same_shape(op: Operation, left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left != right {
        return Err(MatrixError::DimensionMismatch { op, left, right });
    }
    Ok(())
}

/// Check that `left * right` is defined
pub fn check_multiply_compatible(left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left.1 != right.0 {
        return Err(MatrixError::DimensionMismatch {
            op: Operation::Multiply,
            left,
            right,
        });
    }
    Ok(())
}

impl SparseMatrix {
    /// Entrywise sum `self + other`
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        check_same_shape(Operation::Add, self.dimensions(), other.dimensions())?;
        self.combine(other, i64::checked_add)
    }

    /// Entrywise difference `self - other`
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        check_same_shape(Operation::Subtract, self.dimensions(), other.dimensions())?;
        self.combine(other, i64::checked_sub)
    }

    /// Matrix product `self * other`
    ///
    /// The right operand is grouped by row once so each left entry `(i, k)`
    /// only visits the entries of right row `k`.
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        check_multiply_compatible(self.dimensions(), other.dimensions())?;

        let mut right_rows: HashMap<usize, Vec<(usize, i64)>> = HashMap::new();
        for entry in other.iter() {
            right_rows
                .entry(entry.row)
                .or_default()
                .push((entry.col, entry.value));
        }

        // Partial sums are kept in i128 so only the final value of each cell
        // has to fit in i64, whatever order the terms arrive in.
        let mut sums: HashMap<(usize, usize), i128> = HashMap::new();
        for left in self.iter() {
            let Some(row) = right_rows.get(&left.col) else {
                continue;
            };
            for &(j, value) in row {
                let product = i128::from(left.value) * i128::from(value);
                let sum = sums.entry((left.row, j)).or_insert(0);
                *sum = sum
                    .checked_add(product)
                    .ok_or(MatrixError::ArithmeticOverflow { row: left.row, col: j })?;
            }
        }

        let mut result = SparseMatrix::new(self.rows(), other.cols());
        for ((i, j), sum) in sums {
            let value = i64::try_from(sum)
                .map_err(|_| MatrixError::ArithmeticOverflow { row: i, col: j })?;
            result.store(i, j, value);
        }
        Ok(result)
    }

    /// Every entry multiplied by `factor`
    pub fn scaled_by(&self, factor: i64) -> Result<SparseMatrix> {
        let mut result = SparseMatrix::new(self.rows(), self.cols());
        for entry in self.iter() {
            let value = entry
                .value
                .checked_mul(factor)
                .ok_or(MatrixError::ArithmeticOverflow {
                    row: entry.row,
                    col: entry.col,
                })?;
            result.store(entry.row, entry.col, value);
        }
        Ok(result)
    }

    /// Transposed copy with shape `(cols, rows)`
    pub fn transpose(&self) -> SparseMatrix {
        let mut result = SparseMatrix::new(self.cols(), self.rows());
        for entry in self.iter() {
            result.store(entry.col, entry.row, entry.value);
        }
        result
    }

    /// Copy `self`, then fold each entry of `other` into it with `op`
    fn combine(&self, other: &SparseMatrix, op: fn(i64, i64) -> Option<i64>) -> Result<SparseMatrix> {
        let mut result = self.clone();
        for entry in other.iter() {
            let current = result.value_at(entry.row, entry.col);
            let value = op(current, entry.value).ok_or(MatrixError::ArithmeticOverflow {
                row: entry.row,
                col: entry.col,
            })?;
            result.store(entry.row, entry.col, value);
        }
        Ok(result)
    }
}
