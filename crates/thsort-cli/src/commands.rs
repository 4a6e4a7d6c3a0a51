use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use thsort_cli::render::{ProfileOverrides, load_input, render_to, resolve_profile, simulate};
use thsort_core::{HeaderAugmenter, is_header_line};
use thsort_model::ColumnKey;
use thsort_profiles::ProfileRegistry;

use crate::cli::{ColumnsArgs, ProfilesArgs, RenderArgs, SimulateArgs};
use crate::summary::{apply_table_style, print_columns, print_report, print_simulation};

fn load_registry(profiles: Option<&Path>) -> Result<ProfileRegistry> {
    ProfileRegistry::load(profiles).context("load profiles")
}

pub fn run_render(args: &RenderArgs, profiles: Option<&Path>) -> Result<()> {
    let registry = load_registry(profiles)?;
    let overrides = ProfileOverrides {
        tag: args.tag.clone(),
        exclude: args.exclude.clone(),
        toggle: args.toggle.map(Into::into),
    };
    let mut profile = resolve_profile(&registry, &args.profile, &overrides)?;
    load_input(&mut profile, args.input.as_deref())?;

    let span = info_span!("render", profile = %profile.name);
    let _guard = span.enter();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = render_to(&profile, &mut out).context("write header block")?;
    drop(out);
    if args.summary {
        print_report(&profile, &report);
    }
    Ok(())
}

pub fn run_profiles(args: &ProfilesArgs, profiles: Option<&Path>) -> Result<()> {
    let registry = load_registry(profiles)?;
    if args.json {
        let listing: Vec<_> = registry.iter().collect();
        let json = serde_json::to_string_pretty(&listing).context("serialize profiles")?;
        println!("{json}");
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec![
        "Profile",
        "Tag",
        "Lookup",
        "Columns",
        "Excluded",
        "Toggle",
        "Description",
    ]);
    apply_table_style(&mut table);
    for profile in registry.iter() {
        let excluded: Vec<&str> = profile.exclude.iter().map(ColumnKey::as_str).collect();
        table.add_row(vec![
            profile.name.clone(),
            profile.tag.to_string(),
            profile.prefs.clone().unwrap_or_else(|| "-".to_string()),
            profile
                .block
                .lines()
                .filter(|line| is_header_line(line))
                .count()
                .to_string(),
            excluded.join(", "),
            profile.toggle.to_string(),
            profile.description.clone().unwrap_or_default(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_columns(args: &ColumnsArgs, profiles: Option<&Path>) -> Result<()> {
    let registry = load_registry(profiles)?;
    let profile = registry.get(&args.profile)?;
    let rendered = HeaderAugmenter::from_profile(profile).augment_block(&profile.block);
    print_columns(profile, &rendered.report);
    Ok(())
}

pub fn run_simulate(args: &SimulateArgs) -> Result<()> {
    let steps = simulate(&args.clicks, args.toggle.into());
    print_simulation(&steps, args.toggle.into());
    Ok(())
}
