//! Dimension and position bounds checks
//!
//! Positions read from text are signed so that negative indices surface as
//! `IndexOutOfRange` instead of a parse failure.

use crate::{MatrixError, Result};

/// Validate signed dimensions, returning them as `usize`
pub const fn check_dimensions(rows: i64, cols: i64) -> Result<(usize, usize)> {
    if rows < 0 || cols < 0 {
        return Err(MatrixError::InvalidDimension { rows, cols });
    }
    Ok((rows as usize, cols as usize))
}

/// Validate a signed position against matrix dimensions
///
/// Returns the position as `usize` indices when `0 <= row < rows` and
/// `0 <= col < cols`.
pub const fn check_position(row: i64, col: i64, rows: usize, cols: usize) -> Result<(usize, usize)> {
    if row < 0 || col < 0 || row as u64 >= rows as u64 || col as u64 >= cols as u64 {
        return Err(MatrixError::IndexOutOfRange {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok((row as usize, col as usize))
}

/// Validate an unsigned position against matrix dimensions
pub const fn check_index(row: usize, col: usize, rows: usize, cols: usize) -> Result<()> {
    if row >= rows || col >= cols {
        return Err(MatrixError::IndexOutOfRange {
            row: saturating_i64(row),
            col: saturating_i64(col),
            rows,
            cols,
        });
    }
    Ok(())
}

const fn saturating_i64(value: usize) -> i64 {
    if value > i64::MAX as usize {
        i64::MAX
    } else {
        value as i64
    }
}
