//! spmat - sparse integer matrix files and arithmetic
//!
//! This crate adds file I/O, logging and an interactive front end on top of
//! the pure definitions in `spmat-core`.
//!
//! ## Architecture
//!
//! - **spmat-core**: matrix type, arithmetic, text format and validation (no I/O)
//! - **spmat**: file reading and writing, error reporting, logging, CLI menu
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{SparseMatrix, SparseMatrixFileExt};
//!
//! fn example() -> spmat::Result<()> {
//!     let a = SparseMatrix::load_from_file("a.txt")?;
//!     let b = SparseMatrix::load_from_file("b.txt")?;
//!     a.multiply(&b)?.save_to_file("product.txt")?;
//!     Ok(())
//! }
//! ```

// Re-export core abstractions and format definitions
pub use spmat_core::{
    // Matrix types
    Entry, SparseMatrix,
    // Error handling
    ErrorKind, MalformedReason, MatrixError,
    // Text format
    format,
};

pub mod compute;
pub mod config;
pub mod error;
pub mod file_io;
pub mod logging;
pub mod menu;
pub mod summary;

pub use compute::{compute_files, BinaryOp};
pub use config::{LogConfig, LogFormat};
pub use error::{Error, Result};
pub use file_io::{MatrixFile, SparseMatrixFileExt};
pub use logging::init_logging;
pub use menu::Menu;
pub use summary::MatrixSummary;
