//! Text format definitions for sparse matrix files
//!
//! The layout is line oriented:
//!
//! ```text
//! rows=<non-negative integer>
//! cols=<non-negative integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Blank lines are ignored anywhere. This module only converts between text
//! and [`SparseMatrix`](crate::SparseMatrix); reading and writing files is
//! left to the I/O crate.

pub mod constants;
pub mod reader;
pub mod writer;

pub use reader::{parse_matrix, parse_str, ParsedMatrix};
pub use writer::{to_text, write_matrix};
