//! Text document serializer

use alloc::string::String;
use core::fmt::Write;

use super::constants::{COLS_KEY, ROWS_KEY};
use crate::SparseMatrix;

/// Write `matrix` as a text document
///
/// Entries are written in ascending row, then column order, so output is
/// reproducible regardless of storage order.
pub fn write_matrix<W: Write>(matrix: &SparseMatrix, out: &mut W) -> core::fmt::Result {
    writeln!(out, "{ROWS_KEY}={}", matrix.rows())?;
    writeln!(out, "{COLS_KEY}={}", matrix.cols())?;
    for entry in matrix.sorted_entries() {
        writeln!(out, "({}, {}, {})", entry.row, entry.col, entry.value)?;
    }
    Ok(())
}

/// Render `matrix` as a text document
pub fn to_text(matrix: &SparseMatrix) -> String {
    let mut text = String::new();
    // Writing into a String cannot fail
    let _ = write_matrix(matrix, &mut text);
    text
}
