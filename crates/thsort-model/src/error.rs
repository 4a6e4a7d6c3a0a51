use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid cell tag {0:?}: expected an element name such as `TableHead` or `th`")]
    InvalidTag(String),
    #[error("invalid {role} binding {name:?}: expected a JavaScript identifier")]
    InvalidBinding { role: &'static str, name: String },
    #[error("invalid column key {0:?}: keys are non-empty and contain no single quote")]
    InvalidKey(String),
    #[error("unknown sort direction {0:?} (expected `asc` or `desc`)")]
    UnknownDirection(String),
    #[error("unknown toggle mode {0:?} (expected `always-flip` or `reset-on-change`)")]
    UnknownToggleMode(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
