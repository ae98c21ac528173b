//! Text document parser

use alloc::vec::Vec;
use hashbrown::HashSet;

use super::constants::{COLS_KEY, ROWS_KEY};
use crate::error::MalformedReason;
use crate::validation::{check_dimensions, check_position, parse_entry_line, parse_header_line};
use crate::{Entry, MatrixError, Result, SparseMatrix};

/// Dimensions and entries exactly as listed in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMatrix {
    pub rows: usize,
    pub cols: usize,
    /// Entries in document order, zero values included
    pub entries: Vec<Entry>,
}

impl ParsedMatrix {
    /// Build the matrix described by this document
    pub fn into_matrix(self) -> Result<SparseMatrix> {
        SparseMatrix::from_entries(self.rows, self.cols, self.entries)
    }
}

enum State {
    ExpectRows,
    ExpectCols { rows: usize },
    Entries { rows: usize, cols: usize },
}

/// Parse a matrix document
///
/// Line numbers in `MalformedFile` errors are 1-based physical lines; a
/// document that ends before its headers reports the line after the last.
pub fn parse_str(text: &str) -> Result<ParsedMatrix> {
    let mut state = State::ExpectRows;
    let mut entries = Vec::new();
    let mut seen = HashSet::new();
    let mut line_count = 0;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        line_count = line_no;
        if line.trim().is_empty() {
            continue;
        }

        state = match state {
            State::ExpectRows => {
                let rows = parse_header_line(line, ROWS_KEY)
                    .ok_or(MatrixError::malformed(line_no, MalformedReason::MissingRowsHeader))?;
                if rows < 0 {
                    return Err(MatrixError::InvalidDimension { rows, cols: 0 });
                }
                State::ExpectCols { rows: rows as usize }
            }
            State::ExpectCols { rows } => {
                let cols = parse_header_line(line, COLS_KEY)
                    .ok_or(MatrixError::malformed(line_no, MalformedReason::MissingColsHeader))?;
                let (rows, cols) = check_dimensions(rows as i64, cols)?;
                State::Entries { rows, cols }
            }
            State::Entries { rows, cols } => {
                let (row, col, value) = parse_entry_line(line)
                    .ok_or(MatrixError::malformed(line_no, MalformedReason::InvalidEntry))?;
                let (row, col) = check_position(row, col, rows, cols)?;
                if !seen.insert((row, col)) {
                    return Err(MatrixError::malformed(line_no, MalformedReason::DuplicateEntry));
                }
                entries.push(Entry::new(row, col, value));
                State::Entries { rows, cols }
            }
        };
    }

    match state {
        State::ExpectRows => Err(MatrixError::malformed(
            line_count + 1,
            MalformedReason::MissingRowsHeader,
        )),
        State::ExpectCols { .. } => Err(MatrixError::malformed(
            line_count + 1,
            MalformedReason::MissingColsHeader,
        )),
        State::Entries { rows, cols } => Ok(ParsedMatrix {
            rows,
            cols,
            entries,
        }),
    }
}

/// Parse a matrix document straight into a [`SparseMatrix`]
pub fn parse_matrix(text: &str) -> Result<SparseMatrix> {
    parse_str(text)?.into_matrix()
}
