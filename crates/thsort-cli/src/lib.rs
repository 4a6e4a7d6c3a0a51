//! CLI library components for the sortable header generator.

pub mod logging;
pub mod render;
