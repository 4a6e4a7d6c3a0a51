#![deny(unsafe_code)]

pub mod builtin;
pub mod error;
pub mod file;
pub mod registry;

pub use crate::builtin::{builtin_names, builtin_profiles};
pub use crate::error::{ProfileError, Result};
pub use crate::file::{ProfileEntry, ProfileFile, load_profiles};
pub use crate::registry::ProfileRegistry;
