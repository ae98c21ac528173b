//! Line-level parsers for the matrix text format
//!
//! This module provides pure parsing functions for individual lines with no
//! I/O dependencies. Each function returns `None` when the line does not
//! match its pattern; the document parser attaches the line number.

/// Parse a header line of the form `<key>=<integer>`
///
/// Whitespace is tolerated around the key, the `=` and the value. Anything
/// else on the line rejects it.
pub fn parse_header_line(line: &str, key: &str) -> Option<i64> {
    let rest = line.trim().strip_prefix(key)?;
    let value = rest.trim_start().strip_prefix('=')?;
    parse_int(value)
}

/// Parse an entry line of the form `(<row>, <col>, <value>)`
///
/// Whitespace is tolerated around every token. Trailing or embedded
/// characters outside the pattern reject the line.
pub fn parse_entry_line(line: &str) -> Option<(i64, i64, i64)> {
    let inner = line.trim().strip_prefix('(')?.strip_suffix(')')?;

    let mut parts = inner.split(',');
    let row = parse_int(parts.next()?)?;
    let col = parse_int(parts.next()?)?;
    let value = parse_int(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }

    Some((row, col, value))
}

/// Parse a signed integer, ignoring surrounding whitespace
fn parse_int(token: &str) -> Option<i64> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    token.parse().ok()
}
