//! Format constants for the matrix text layout

/// Key of the first header line (`rows=<n>`)
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line (`cols=<n>`)
pub const COLS_KEY: &str = "cols";

/// Number of entries shown by the `Display` preview
pub const DISPLAY_PREVIEW: usize = 10;
