//! Profile resolution, input loading and streamed rendering.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use thsort_core::{HeaderAugmenter, RunReport, split_lines};
use thsort_model::{CellTag, ColumnKey, SortDirection, SortState, ToggleMode, ViewProfile};
use thsort_profiles::ProfileRegistry;

/// Command-line adjustments applied on top of a profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileOverrides {
    pub tag: Option<CellTag>,
    /// Replaces the profile's exclusions when non-empty.
    pub exclude: Vec<ColumnKey>,
    pub toggle: Option<ToggleMode>,
}

/// Look up `name` and apply `overrides`.
pub fn resolve_profile(
    registry: &ProfileRegistry,
    name: &str,
    overrides: &ProfileOverrides,
) -> Result<ViewProfile> {
    let mut profile = registry.get(name)?.clone();
    if let Some(tag) = &overrides.tag {
        profile = profile.with_tag(tag.clone());
    }
    if !overrides.exclude.is_empty() {
        profile = profile.with_exclude(overrides.exclude.clone());
    }
    if let Some(toggle) = overrides.toggle {
        profile = profile.with_toggle(toggle);
    }
    info!(
        profile = %profile.name,
        tag = %profile.tag,
        toggle = %profile.toggle,
        "resolved profile"
    );
    Ok(profile)
}

/// Replace the profile's block with the contents of `input` (`-` reads stdin).
pub fn load_input(profile: &mut ViewProfile, input: Option<&Path>) -> Result<()> {
    let Some(path) = input else {
        return Ok(());
    };
    let block = if path == Path::new("-") {
        let mut block = String::new();
        io::stdin()
            .read_to_string(&mut block)
            .context("read header block from stdin")?;
        block
    } else {
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
    };
    debug!(lines = block.lines().count(), "loaded header block");
    profile.block = block;
    Ok(())
}

/// Rewrite the profile's block line by line into `out`.
pub fn render_to<W: Write>(profile: &ViewProfile, out: &mut W) -> io::Result<RunReport> {
    let augmenter = HeaderAugmenter::from_profile(profile);
    let mut report = RunReport::new(profile.prefs.clone());
    for (index, line) in augmenter.augment_lines(split_lines(&profile.block)).enumerate() {
        report.record(index + 1, &line);
        writeln!(out, "{}", line.text)?;
    }
    out.flush()?;
    info!(
        profile = %profile.name,
        lines = report.total,
        augmented = report.augmented,
        excluded = report.excluded,
        passthrough = report.passthrough,
        tag_mismatch = report.tag_mismatch,
        "rendered header block"
    );
    Ok(report)
}

/// Sort state after one simulated click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationStep {
    pub clicked: ColumnKey,
    pub state: SortState,
}

impl SimulationStep {
    pub fn direction(&self) -> SortDirection {
        self.state.direction
    }
}

/// Replay `clicks` from the initial (no column, ascending) state.
pub fn simulate(clicks: &[ColumnKey], mode: ToggleMode) -> Vec<SimulationStep> {
    let mut state = SortState::default();
    clicks
        .iter()
        .map(|clicked| {
            state.click(clicked, mode);
            SimulationStep {
                clicked: clicked.clone(),
                state: state.clone(),
            }
        })
        .collect()
}
