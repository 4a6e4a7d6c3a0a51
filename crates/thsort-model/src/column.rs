//! Column keys and header cell tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Key of the control column that is never sortable.
pub const ACTIONS_KEY: &str = "actions";

/// Identifier of a table column, as written inside `isColumnVisible('<key>')`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColumnKey(String);

impl ColumnKey {
    /// Create a key, rejecting empty values and values containing `'`.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() || key.contains('\'') {
            return Err(ModelError::InvalidKey(key));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The default excluded key.
    #[must_use]
    pub fn actions() -> Self {
        Self(ACTIONS_KEY.to_string())
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ColumnKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ColumnKey {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ColumnKey> for String {
    fn from(key: ColumnKey) -> Self {
        key.0
    }
}

impl FromStr for ColumnKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim())
    }
}

/// Element name of a header cell.
///
/// Component-library tables use `TableHead`; plain tables use `th`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CellTag(String);

impl CellTag {
    pub const TABLE_HEAD: &'static str = "TableHead";
    pub const TH: &'static str = "th";

    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        if !is_element_name(&tag) {
            return Err(ModelError::InvalidTag(tag));
        }
        Ok(Self(tag))
    }

    #[must_use]
    pub fn table_head() -> Self {
        Self(Self::TABLE_HEAD.to_string())
    }

    #[must_use]
    pub fn th() -> Self {
        Self(Self::TH.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Start of the opening tag, e.g. `<th`.
    pub fn open(&self) -> String {
        format!("<{}", self.0)
    }

    /// Closing tag, e.g. `</th>`.
    pub fn close(&self) -> String {
        format!("</{}>", self.0)
    }
}

impl Default for CellTag {
    fn default() -> Self {
        Self::table_head()
    }
}

impl fmt::Display for CellTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CellTag {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CellTag> for String {
    fn from(tag: CellTag) -> Self {
        tag.0
    }
}

impl FromStr for CellTag {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim())
    }
}

/// `[A-Za-z][A-Za-z0-9_.]*`, which covers `th` and `Table.Head` style names.
fn is_element_name(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_key_rejects_quote_and_empty() {
        assert!(ColumnKey::new("uniqueId").is_ok());
        assert_eq!(
            ColumnKey::new("it's"),
            Err(ModelError::InvalidKey("it's".to_string()))
        );
        assert!(ColumnKey::new("").is_err());
    }

    #[test]
    fn test_cell_tag_fragments() {
        let tag = CellTag::th();
        assert_eq!(tag.open(), "<th");
        assert_eq!(tag.close(), "</th>");
        assert_eq!(CellTag::default().as_str(), "TableHead");
    }

    #[test]
    fn test_cell_tag_validation() {
        assert!("TableHead".parse::<CellTag>().is_ok());
        assert!("Table.Head".parse::<CellTag>().is_ok());
        assert!("1th".parse::<CellTag>().is_err());
        assert!("th class".parse::<CellTag>().is_err());
        assert!("".parse::<CellTag>().is_err());
    }

    #[test]
    fn test_column_key_serde_validates() {
        let key: ColumnKey = serde_json::from_str("\"age\"").expect("deserialize key");
        assert_eq!(key.as_str(), "age");
        assert!(serde_json::from_str::<ColumnKey>("\"a'b\"").is_err());
    }
}
