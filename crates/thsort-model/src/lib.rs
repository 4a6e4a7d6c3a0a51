//! Domain types shared by the header augmenter, profile registry and CLI.

pub mod column;
pub mod error;
pub mod profile;
pub mod sort;

pub use column::{ACTIONS_KEY, CellTag, ColumnKey};
pub use error::{ModelError, Result};
pub use profile::ViewProfile;
pub use sort::{SortBindings, SortDirection, SortState, ToggleMode};
