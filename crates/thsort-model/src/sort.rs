//! Sort direction, toggle behavior and the per-view sort state.
//!
//! The generated markup never owns sort state. It reads and writes the
//! bindings named in [`SortBindings`], which belong to the view component.
//! [`SortState`] mirrors that state so the toggle rules can be exercised
//! without a browser.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::column::ColumnKey;
use crate::error::{ModelError, Result};

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Literal used in the generated handlers (`'asc'` / `'desc'`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub const fn glyph(&self) -> char {
        match self {
            Self::Asc => '▲',
            Self::Desc => '▼',
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(ModelError::UnknownDirection(s.to_string())),
        }
    }
}

/// How a header click changes the sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToggleMode {
    /// Every click flips the direction, including a click on a column that
    /// was not active. Matches the handlers already pasted into the views.
    #[default]
    AlwaysFlip,
    /// A newly selected column starts ascending; clicking the active column
    /// flips it.
    ResetOnChange,
}

impl ToggleMode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AlwaysFlip => "always-flip",
            Self::ResetOnChange => "reset-on-change",
        }
    }
}

impl fmt::Display for ToggleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToggleMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "always-flip" | "flip" => Ok(Self::AlwaysFlip),
            "reset-on-change" | "reset" => Ok(Self::ResetOnChange),
            _ => Err(ModelError::UnknownToggleMode(s.to_string())),
        }
    }
}

/// Names of the view state referenced by generated handlers and glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortBindings {
    pub key_var: String,
    pub dir_var: String,
    pub set_key: String,
    pub set_dir: String,
}

impl Default for SortBindings {
    fn default() -> Self {
        Self {
            key_var: "sortKey".to_string(),
            dir_var: "sortDir".to_string(),
            set_key: "setSortKey".to_string(),
            set_dir: "setSortDir".to_string(),
        }
    }
}

impl SortBindings {
    /// Check every binding is a plain JavaScript identifier.
    pub fn validate(&self) -> Result<()> {
        for (role, name) in [
            ("sort key", &self.key_var),
            ("sort direction", &self.dir_var),
            ("key setter", &self.set_key),
            ("direction setter", &self.set_dir),
        ] {
            if !is_js_identifier(name) {
                return Err(ModelError::InvalidBinding {
                    role,
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }
}

fn is_js_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Active sort column and direction of one view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub key: Option<ColumnKey>,
    pub direction: SortDirection,
}

impl SortState {
    /// Apply a header click on `key`.
    pub fn click(&mut self, key: &ColumnKey, mode: ToggleMode) {
        let same_column = self.key.as_ref() == Some(key);
        self.direction = match mode {
            ToggleMode::AlwaysFlip => self.direction.flipped(),
            ToggleMode::ResetOnChange if same_column => self.direction.flipped(),
            ToggleMode::ResetOnChange => SortDirection::Asc,
        };
        if !same_column {
            self.key = Some(key.clone());
        }
    }

    /// Direction shown on `key`'s header, if it is the active column.
    #[must_use]
    pub fn glyph_for(&self, key: &ColumnKey) -> Option<SortDirection> {
        (self.key.as_ref() == Some(key)).then_some(self.direction)
    }

    /// Suffix the generated conditional renders after `key`'s label.
    #[must_use]
    pub fn indicator(&self, key: &ColumnKey) -> &'static str {
        match self.glyph_for(key) {
            Some(SortDirection::Asc) => " ▲",
            Some(SortDirection::Desc) => " ▼",
            None => "",
        }
    }
}
