//! Recognition of `isColumnVisible('<key>')` markers.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// `<receiver>.isColumnVisible('<key>')`, receiver optional, key without `'`.
static COLUMN_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:([A-Za-z_$][A-Za-z0-9_$]*)\.)?isColumnVisible\('([^']+)'\)")
        .expect("Invalid column marker regex")
});

/// A column marker found on a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMatch<'a> {
    pub key: &'a str,
    /// Variable the lookup is called on, e.g. `financeColumnPrefs`.
    pub receiver: Option<&'a str>,
    pub span: (usize, usize),
}

impl ColumnMatch<'_> {
    pub fn range(&self) -> Range<usize> {
        self.span.0..self.span.1
    }
}

/// Extract the first column marker on `line`.
pub fn extract(line: &str) -> Option<ColumnMatch<'_>> {
    let captures = COLUMN_MARKER_REGEX.captures(line)?;
    let whole = captures.get(0)?;
    let key = captures.get(2)?;
    Some(ColumnMatch {
        key: key.as_str(),
        receiver: captures.get(1).as_ref().map(regex::Match::as_str),
        span: (whole.start(), whole.end()),
    })
}

/// True when `line` carries a column marker.
pub fn is_header_line(line: &str) -> bool {
    COLUMN_MARKER_REGEX.is_match(line)
}
