//! File-to-file arithmetic
//!
//! Loads two operands, applies one operation and saves the result. This is
//! the single path shared by the one-shot subcommands and the interactive
//! menu.

use std::path::Path;

use spmat_core::SparseMatrix;
use tracing::{info, instrument};

use crate::error::Result;
use crate::file_io::SparseMatrixFileExt;

/// Binary operation on two matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
}

impl BinaryOp {
    /// Apply this operation to two in-memory matrices
    pub fn apply(self, left: &SparseMatrix, right: &SparseMatrix) -> Result<SparseMatrix> {
        let result = match self {
            BinaryOp::Add => left.add(right)?,
            BinaryOp::Subtract => left.subtract(right)?,
            BinaryOp::Multiply => left.multiply(right)?,
        };
        Ok(result)
    }

    /// Human-readable operation name
    pub const fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "Addition",
            BinaryOp::Subtract => "Subtraction",
            BinaryOp::Multiply => "Multiplication",
        }
    }
}

/// Load `left` and `right`, apply `op`, and save the result to `output`
#[instrument(skip_all, fields(op = op.name()))]
pub fn compute_files(
    op: BinaryOp,
    left: &Path,
    right: &Path,
    output: &Path,
) -> Result<SparseMatrix> {
    let a = SparseMatrix::load_from_file(left)?;
    let b = SparseMatrix::load_from_file(right)?;
    let result = op.apply(&a, &b)?;
    result.save_to_file(output)?;

    info!(
        rows = result.rows(),
        cols = result.cols(),
        nnz = result.nnz(),
        output = %output.display(),
        "operation completed"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmat_core::{Entry, ErrorKind};

    #[test]
    fn test_apply() {
        let a = SparseMatrix::from_entries(2, 2, [Entry::new(0, 0, 1), Entry::new(1, 1, 2)]).unwrap();
        let b = SparseMatrix::from_entries(2, 2, [Entry::new(0, 0, 3), Entry::new(0, 1, 4)]).unwrap();

        assert_eq!(BinaryOp::Add.apply(&a, &b).unwrap().get_element(0, 0), Ok(4));
        assert_eq!(BinaryOp::Subtract.apply(&a, &b).unwrap().get_element(0, 1), Ok(-4));
        assert_eq!(BinaryOp::Multiply.apply(&a, &b).unwrap().get_element(0, 1), Ok(4));

        let c = SparseMatrix::new(3, 3);
        assert_eq!(
            BinaryOp::Add.apply(&a, &c).unwrap_err().kind(),
            ErrorKind::DimensionMismatch
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(BinaryOp::Add.name(), "Addition");
        assert_eq!(BinaryOp::Subtract.name(), "Subtraction");
        assert_eq!(BinaryOp::Multiply.name(), "Multiplication");
    }
}
