#![no_std]

//! spmat core - sparse integer matrix definitions
//!
//! This crate provides the sparse matrix type, its arithmetic, and the text
//! format used to store it. It performs no I/O: parsing works on `&str` and
//! serialization on any [`core::fmt::Write`].
//!
//! ```
//! use spmat_core::format;
//!
//! let a = format::parse_matrix("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n").unwrap();
//! let b = format::parse_matrix("rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n").unwrap();
//!
//! let product = a.multiply(&b).unwrap();
//! assert_eq!(product.get_element(0, 1), Ok(4));
//! assert_eq!(product.get_element(1, 1), Ok(0));
//! assert_eq!(
//!     format::to_text(&a.add(&b).unwrap()),
//!     "rows=2\ncols=2\n(0, 0, 4)\n(0, 1, 4)\n(1, 1, 2)\n"
//! );
//! ```

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod validation;

pub use error::*;
pub use matrix::{Entry, SparseMatrix};
pub use ops::{check_multiply_compatible, check_same_shape};
pub use validation::{check_dimensions, check_position};
