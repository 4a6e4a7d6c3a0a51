//! Sortable table-header generation.
//!
//! [`HeaderAugmenter`] turns lines such as
//!
//! ```text
//! {prefs.isColumnVisible('age') && <TableHead className="w-20">Age</TableHead>}
//! ```
//!
//! into cells with a sort click handler and a direction glyph. Lines without
//! a column marker, and excluded columns, pass through untouched.

pub mod augment;
pub mod pattern;
pub mod report;

pub use augment::{
    AugmentOptions, AugmentedLine, CURSOR_CLASS, HeaderAugmenter, LineOutcome, Rendered,
    split_lines,
};
pub use pattern::{ColumnMatch, extract, is_header_line};
pub use report::{ColumnEntry, ReceiverMismatch, RunReport};
