use std::path::PathBuf;

use thsort_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown profile {name:?} (available: {available})")]
    UnknownProfile { name: String, available: String },

    #[error("duplicate profile {name:?} in {path}")]
    DuplicateProfile { name: String, path: PathBuf },

    #[error("invalid profile {name:?}: {message}")]
    InvalidProfile { name: String, message: String },

    #[error("invalid profile {name:?}: {source}")]
    Model {
        name: String,
        #[source]
        source: ModelError,
    },
}

impl ProfileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            name: name.into(),
            message: message.into(),
        }
    }

    pub(crate) fn model(name: impl Into<String>, source: ModelError) -> Self {
        Self::Model {
            name: name.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
