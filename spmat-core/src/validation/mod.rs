//! Validation utilities for sparse matrix dimensions, positions and text lines
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{check_dimensions, check_index, check_position};
pub use parsing::{parse_entry_line, parse_header_line};
