use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use thsort_model::ViewProfile;

use crate::builtin::builtin_profiles;
use crate::error::{ProfileError, Result};
use crate::file::load_profiles;

/// Profiles by name.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, ViewProfile>,
}

impl ProfileRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding the built-in views.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for profile in builtin_profiles() {
            registry.insert(profile);
        }
        registry
    }

    /// Built-in views overlaid with the profiles in `path`, if any.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut registry = Self::builtin();
        if let Some(path) = path {
            let custom = load_profiles(path)?;
            info!(path = %path.display(), count = custom.len(), "loaded custom profiles");
            registry.merge(custom);
        }
        Ok(registry)
    }

    /// Insert a profile, returning the one it replaced.
    pub fn insert(&mut self, profile: ViewProfile) -> Option<ViewProfile> {
        self.profiles.insert(profile.name.clone(), profile)
    }

    /// Insert every profile; later ones override earlier ones of the same name.
    pub fn merge(&mut self, profiles: impl IntoIterator<Item = ViewProfile>) {
        for profile in profiles {
            let name = profile.name.clone();
            if self.insert(profile).is_some() {
                debug!(profile = %name, "profile overrides an existing one");
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<&ViewProfile> {
        self.profiles
            .get(name)
            .ok_or_else(|| ProfileError::UnknownProfile {
                name: name.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewProfile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
