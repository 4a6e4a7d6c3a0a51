//! View profiles: one header block plus the parameters used to rewrite it.

use serde::Serialize;

use crate::column::{CellTag, ColumnKey};
use crate::sort::{SortBindings, ToggleMode};

/// A named table view whose header row gets sortable cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewProfile {
    pub name: String,
    pub description: Option<String>,
    pub tag: CellTag,
    /// Receiver of `isColumnVisible`, e.g. `financeColumnPrefs`.
    pub prefs: Option<String>,
    pub exclude: Vec<ColumnKey>,
    pub toggle: ToggleMode,
    pub bindings: SortBindings,
    #[serde(skip)]
    pub block: String,
}

impl ViewProfile {
    /// Profile with the default tag, `actions` exclusion and bindings.
    pub fn new(name: impl Into<String>, block: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            tag: CellTag::default(),
            prefs: None,
            exclude: vec![ColumnKey::actions()],
            toggle: ToggleMode::default(),
            bindings: SortBindings::default(),
            block: block.into(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: CellTag) -> Self {
        self.tag = tag;
        self
    }

    #[must_use]
    pub fn with_prefs(mut self, prefs: impl Into<String>) -> Self {
        self.prefs = Some(prefs.into());
        self
    }

    #[must_use]
    pub fn with_exclude(mut self, exclude: Vec<ColumnKey>) -> Self {
        self.exclude = exclude;
        self
    }

    #[must_use]
    pub fn with_toggle(mut self, toggle: ToggleMode) -> Self {
        self.toggle = toggle;
        self
    }

    #[must_use]
    pub fn with_bindings(mut self, bindings: SortBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn is_excluded(&self, key: &str) -> bool {
        self.exclude.iter().any(|excluded| excluded.as_str() == key)
    }

    pub fn line_count(&self) -> usize {
        self.block.lines().count()
    }
}
