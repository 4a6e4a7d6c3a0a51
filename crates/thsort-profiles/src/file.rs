//! TOML profile files.
//!
//! ```toml
//! [[profile]]
//! name = "orders"
//! tag = "th"
//! prefs = "orderColumnPrefs"
//! exclude = ["actions", "select"]
//! toggle = "reset-on-change"
//! source = "orders_header.tsx"
//!
//! [profile.bindings]
//! key_var = "orderBy"
//! ```
//!
//! `source` is resolved relative to the TOML file. A profile carries either
//! `source` or an inline `block`, never both.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use thsort_model::{CellTag, ColumnKey, SortBindings, ToggleMode, ViewProfile};

use crate::error::{ProfileError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileFile {
    #[serde(rename = "profile", default)]
    pub profiles: Vec<ProfileEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub prefs: Option<String>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
    #[serde(default)]
    pub toggle: Option<ToggleMode>,
    #[serde(default)]
    pub bindings: Option<SortBindings>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub source: Option<PathBuf>,
}

/// Read and validate every profile in `path`.
pub fn load_profiles(path: &Path) -> Result<Vec<ViewProfile>> {
    let text = fs::read_to_string(path).map_err(|e| ProfileError::io(path, e))?;
    let file: ProfileFile = toml::from_str(&text).map_err(|source| ProfileError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut names = BTreeSet::new();
    let mut profiles = Vec::with_capacity(file.profiles.len());
    for entry in file.profiles {
        if !names.insert(entry.name.clone()) {
            return Err(ProfileError::DuplicateProfile {
                name: entry.name,
                path: path.to_path_buf(),
            });
        }
        let profile = entry.into_profile(base_dir)?;
        debug!(profile = %profile.name, lines = profile.line_count(), "loaded profile");
        profiles.push(profile);
    }
    Ok(profiles)
}

impl ProfileEntry {
    /// Validate the entry and resolve its header block.
    pub fn into_profile(self, base_dir: &Path) -> Result<ViewProfile> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ProfileError::invalid(self.name, "name must not be empty"));
        }

        let block = match (self.block, self.source) {
            (Some(block), None) => block,
            (None, Some(source)) => {
                let path = base_dir.join(source);
                fs::read_to_string(&path).map_err(|e| ProfileError::io(path, e))?
            }
            (Some(_), Some(_)) => {
                return Err(ProfileError::invalid(name, "set either `block` or `source`, not both"));
            }
            (None, None) => {
                return Err(ProfileError::invalid(name, "missing `block` or `source`"));
            }
        };

        let mut profile = ViewProfile::new(name.clone(), block);
        if let Some(description) = self.description {
            profile = profile.with_description(description);
        }
        if let Some(tag) = self.tag {
            let tag = CellTag::new(tag).map_err(|e| ProfileError::model(&name, e))?;
            profile = profile.with_tag(tag);
        }
        if let Some(prefs) = self.prefs {
            profile = profile.with_prefs(prefs);
        }
        if let Some(exclude) = self.exclude {
            let keys = exclude
                .into_iter()
                .map(ColumnKey::new)
                .collect::<thsort_model::Result<Vec<_>>>()
                .map_err(|e| ProfileError::model(&name, e))?;
            profile = profile.with_exclude(keys);
        }
        if let Some(toggle) = self.toggle {
            profile = profile.with_toggle(toggle);
        }
        if let Some(bindings) = self.bindings {
            bindings
                .validate()
                .map_err(|e| ProfileError::model(&name, e))?;
            profile = profile.with_bindings(bindings);
        }
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> ProfileEntry {
        ProfileEntry {
            name: name.to_string(),
            description: None,
            tag: None,
            prefs: None,
            exclude: None,
            toggle: None,
            bindings: None,
            block: Some("line".to_string()),
            source: None,
        }
    }

    #[test]
    fn test_entry_defaults() {
        let profile = entry("orders").into_profile(Path::new(".")).unwrap();
        assert_eq!(profile.tag, CellTag::table_head());
        assert!(profile.is_excluded("actions"));
        assert_eq!(profile.toggle, ToggleMode::AlwaysFlip);
    }

    #[test]
    fn test_entry_rejects_block_and_source() {
        let mut both = entry("orders");
        both.source = Some(PathBuf::from("orders.tsx"));
        let err = both.into_profile(Path::new(".")).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidProfile { .. }));

        let mut neither = entry("orders");
        neither.block = None;
        assert!(neither.into_profile(Path::new(".")).is_err());
    }

    #[test]
    fn test_entry_rejects_bad_tag_and_key() {
        let mut bad_tag = entry("orders");
        bad_tag.tag = Some("table head".to_string());
        assert!(matches!(
            bad_tag.into_profile(Path::new(".")),
            Err(ProfileError::Model { .. })
        ));

        let mut bad_key = entry("orders");
        bad_key.exclude = Some(vec!["it's".to_string()]);
        assert!(bad_key.into_profile(Path::new(".")).is_err());
    }

    #[test]
    fn test_entry_rejects_blank_name() {
        let err = entry("  ").into_profile(Path::new(".")).unwrap_err();
        assert_eq!(err.to_string(), "invalid profile \"  \": name must not be empty");
    }

    #[test]
    fn test_parse_toml() {
        let file: ProfileFile = toml::from_str(
            r#"
[[profile]]
name = "orders"
tag = "th"
toggle = "reset-on-change"
exclude = ["actions", "select"]
block = "x"

[profile.bindings]
key_var = "orderBy"
"#,
        )
        .unwrap();
        let profile = file.profiles[0]
            .clone()
            .into_profile(Path::new("."))
            .unwrap();
        assert_eq!(profile.tag, CellTag::th());
        assert_eq!(profile.toggle, ToggleMode::ResetOnChange);
        assert!(profile.is_excluded("select"));
        assert_eq!(profile.bindings.key_var, "orderBy");
        assert_eq!(profile.bindings.dir_var, "sortDir");
    }
}
