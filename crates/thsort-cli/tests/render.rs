//! Integration tests for profile resolution, rendering and click simulation.

use thsort_cli::render::{ProfileOverrides, render_to, resolve_profile, simulate};
use thsort_model::{CellTag, ColumnKey, SortDirection, ToggleMode, ViewProfile};
use thsort_profiles::ProfileRegistry;

fn key(name: &str) -> ColumnKey {
    ColumnKey::new(name).unwrap()
}

fn render(profile: &ViewProfile) -> (String, thsort_core::RunReport) {
    let mut out = Vec::new();
    let report = render_to(profile, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), report)
}

#[test]
fn render_keeps_line_count_and_order() {
    let registry = ProfileRegistry::builtin();
    let profile = resolve_profile(&registry, "report", &ProfileOverrides::default()).unwrap();
    let (text, report) = render(&profile);

    assert_eq!(text.lines().count(), profile.block.lines().count());
    assert_eq!(report.total, profile.block.lines().count());
    let rendered_keys: Vec<_> = text
        .lines()
        .filter_map(|line| thsort_core::extract(line).map(|m| m.key.to_string()))
        .collect();
    let input_keys: Vec<_> = report.column_keys().map(str::to_string).collect();
    assert_eq!(rendered_keys, input_keys);
}

#[test]
fn render_single_line_profile() {
    let profile = ViewProfile::new(
        "people",
        "{prefs.isColumnVisible('age') && <th className=\"w-10\">Age</th>}\n\n",
    )
    .with_tag(CellTag::th())
    .with_toggle(ToggleMode::ResetOnChange);
    let (text, report) = render(&profile);

    assert_eq!(report.augmented, 1);
    assert_eq!(report.passthrough, 1);
    insta::assert_snapshot!(text.lines().next().unwrap(), @r#"{prefs.isColumnVisible('age') && <th onClick={() => { setSortDir(s => sortKey === 'age' ? (s === 'asc' ? 'desc' : 'asc') : 'asc'); setSortKey('age'); }} className="cursor-pointer w-10">Age{sortKey === 'age' ? (sortDir === 'asc' ? ' ▲' : ' ▼') : ''}</th>}"#);
    assert!(text.ends_with("</th>}\n\n"));
}

#[test]
fn render_keeps_crlf_line_endings() {
    let block = "<TableRow>\r\n{prefs.isColumnVisible('actions') && <th className=\"a\">Actions</th>}\r\n{prefs.isColumnVisible('age') && <th className=\"a\">Age</th>}\r\n";
    let profile = ViewProfile::new("people", block).with_tag(CellTag::th());
    let (text, report) = render(&profile);

    assert_eq!(report.total, 3);
    assert_eq!(report.augmented, 1);
    let output: Vec<&str> = text.split_inclusive('\n').collect();
    let input: Vec<&str> = block.split_inclusive('\n').collect();
    assert_eq!(output[..2], input[..2]);
    assert!(
        output[2].ends_with("Age{sortKey === 'age' ? (sortDir === 'asc' ? ' ▲' : ' ▼') : ''}</th>}\r\n")
    );
}

#[test]
fn overrides_replace_profile_settings() {
    let registry = ProfileRegistry::builtin();
    let overrides = ProfileOverrides {
        tag: Some(CellTag::th()),
        exclude: vec![key("uniqueId"), key("actions")],
        toggle: Some(ToggleMode::ResetOnChange),
    };
    let profile = resolve_profile(&registry, "finance", &overrides).unwrap();

    assert_eq!(profile.tag, CellTag::th());
    assert!(profile.is_excluded("uniqueId"));
    assert_eq!(profile.toggle, ToggleMode::ResetOnChange);

    // finance uses TableHead cells, so nothing matches the overridden tag.
    let (text, report) = render(&profile);
    assert_eq!(report.augmented, 0);
    assert_eq!(report.excluded, 2);
    assert_eq!(report.tag_mismatch, report.total - 2);
    assert_eq!(text, format!("{}\n", profile.block.trim_end_matches('\n')));
}

#[test]
fn unknown_profile_is_an_error() {
    let registry = ProfileRegistry::builtin();
    let err = resolve_profile(&registry, "billing", &ProfileOverrides::default()).unwrap_err();
    assert!(err.to_string().starts_with("unknown profile \"billing\""));
}

#[test]
fn simulate_always_flip_flips_on_column_change() {
    let steps = simulate(&[key("age"), key("name"), key("name")], ToggleMode::AlwaysFlip);
    let directions: Vec<_> = steps.iter().map(|step| step.direction()).collect();
    assert_eq!(
        directions,
        vec![SortDirection::Desc, SortDirection::Asc, SortDirection::Desc]
    );
    assert_eq!(steps[1].state.key, Some(key("name")));
}

#[test]
fn simulate_reset_on_change_starts_ascending() {
    let steps = simulate(&[key("age"), key("age"), key("name")], ToggleMode::ResetOnChange);
    let headers: Vec<_> = steps
        .iter()
        .map(|step| format!("{}{}", step.clicked, step.state.indicator(&step.clicked)))
        .collect();
    assert_eq!(headers, vec!["age ▲", "age ▼", "name ▲"]);
}
