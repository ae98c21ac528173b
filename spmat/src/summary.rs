//! Matrix summaries for the `info` command

use spmat_core::format::constants::DISPLAY_PREVIEW;
use spmat_core::{Entry, SparseMatrix};

/// Shape, fill and leading entries of a matrix
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatrixSummary {
    pub rows: usize,
    pub cols: usize,
    pub nnz: usize,
    pub density: f64,
    /// First entries in row-major order
    pub preview: Vec<Entry>,
}

impl MatrixSummary {
    pub fn of(matrix: &SparseMatrix) -> Self {
        let mut preview = matrix.sorted_entries();
        preview.truncate(DISPLAY_PREVIEW);
        Self {
            rows: matrix.rows(),
            cols: matrix.cols(),
            nnz: matrix.nnz(),
            density: matrix.density(),
            preview,
        }
    }

    /// Render as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
