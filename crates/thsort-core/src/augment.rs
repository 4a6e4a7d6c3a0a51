//! Header augmentation: add a sort click handler and a direction glyph to
//! every sortable header cell.
//!
//! The rewrite is textual. A line is classified by its column marker and the
//! configured exclusions; sortable lines get the handler inserted after the
//! first `<Tag`, `cursor-pointer` at the start of the first `className="`
//! that follows it, and the glyph conditional before the next `</Tag>`.
//! Nothing is parsed, so nothing can fail: a line that cannot be rewritten
//! is emitted as it came in. A line rewritten once gets a second handler and
//! glyph on another pass.

use std::borrow::Cow;

use serde::Serialize;
use tracing::{debug, trace};

use thsort_model::{CellTag, ColumnKey, SortBindings, ToggleMode, ViewProfile};

use crate::pattern;
use crate::report::RunReport;

/// Class added in front of the existing class list of sortable cells.
pub const CURSOR_CLASS: &str = "cursor-pointer";

const CLASS_ATTR: &str = "className=\"";

/// Split `text` on `\n` only, so `\r` stays part of each line.
///
/// A trailing newline does not start an extra empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
        .map(|line| line.strip_suffix('\n').unwrap_or(line))
}

/// Parameters of one augmentation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentOptions {
    pub tag: CellTag,
    pub exclude: Vec<ColumnKey>,
    pub toggle: ToggleMode,
    pub bindings: SortBindings,
    /// Expected receiver of `isColumnVisible`; mismatches are only reported.
    pub prefs: Option<String>,
}

impl Default for AugmentOptions {
    fn default() -> Self {
        Self {
            tag: CellTag::default(),
            exclude: vec![ColumnKey::actions()],
            toggle: ToggleMode::default(),
            bindings: SortBindings::default(),
            prefs: None,
        }
    }
}

impl AugmentOptions {
    #[must_use]
    pub fn from_profile(profile: &ViewProfile) -> Self {
        Self {
            tag: profile.tag.clone(),
            exclude: profile.exclude.clone(),
            toggle: profile.toggle,
            bindings: profile.bindings.clone(),
            prefs: profile.prefs.clone(),
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: CellTag) -> Self {
        self.tag = tag;
        self
    }

    #[must_use]
    pub fn with_exclude(mut self, exclude: Vec<ColumnKey>) -> Self {
        self.exclude = exclude;
        self
    }

    #[must_use]
    pub fn with_toggle(mut self, toggle: ToggleMode) -> Self {
        self.toggle = toggle;
        self
    }
}

/// What happened to one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineOutcome {
    /// No column marker.
    Passthrough,
    /// Marker found, key is excluded from sorting.
    Excluded,
    /// Handler and glyph inserted.
    Augmented,
    /// Marker found but the configured cell tag is not on the line.
    TagMismatch,
}

impl LineOutcome {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Passthrough => "passthrough",
            Self::Excluded => "excluded",
            Self::Augmented => "augmented",
            Self::TagMismatch => "tag mismatch",
        }
    }

    /// True when the output line equals the input line.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        !matches!(self, Self::Augmented)
    }
}

/// One output line together with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedLine<'a> {
    pub outcome: LineOutcome,
    pub key: Option<&'a str>,
    pub receiver: Option<&'a str>,
    /// The input already had a click handler before this run.
    pub already_handled: bool,
    pub text: Cow<'a, str>,
}

impl<'a> AugmentedLine<'a> {
    fn unchanged(line: &'a str, outcome: LineOutcome) -> Self {
        Self {
            outcome,
            key: None,
            receiver: None,
            already_handled: false,
            text: Cow::Borrowed(line),
        }
    }
}

/// Collected output of [`HeaderAugmenter::augment_block`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub lines: Vec<String>,
    pub report: RunReport,
}

impl Rendered {
    /// Output lines joined with `\n`, with a trailing newline when non-empty.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        if !self.lines.is_empty() {
            text.push('\n');
        }
        text
    }
}

/// Rewrites header lines into sortable header cells.
#[derive(Debug, Clone)]
pub struct HeaderAugmenter {
    options: AugmentOptions,
    open: String,
    close: String,
}

impl Default for HeaderAugmenter {
    fn default() -> Self {
        Self::new(AugmentOptions::default())
    }
}

impl HeaderAugmenter {
    #[must_use]
    pub fn new(options: AugmentOptions) -> Self {
        let open = options.tag.open();
        let close = options.tag.close();
        Self {
            options,
            open,
            close,
        }
    }

    #[must_use]
    pub fn from_profile(profile: &ViewProfile) -> Self {
        Self::new(AugmentOptions::from_profile(profile))
    }

    pub fn is_excluded(&self, key: &str) -> bool {
        self.options
            .exclude
            .iter()
            .any(|excluded| excluded.as_str() == key)
    }

    /// Classify a line without building its output.
    pub fn classify(&self, line: &str) -> LineOutcome {
        match pattern::extract(line) {
            None => LineOutcome::Passthrough,
            Some(found) if self.is_excluded(found.key) => LineOutcome::Excluded,
            Some(_) if self.locate(line).is_some() => LineOutcome::Augmented,
            Some(_) => LineOutcome::TagMismatch,
        }
    }

    /// Offsets just past the first `<Tag` element name and just past the
    /// first `className="` after it.
    fn locate(&self, line: &str) -> Option<(usize, usize)> {
        let mut from = 0;
        while let Some(found) = line[from..].find(&self.open) {
            let tag_end = from + found + self.open.len();
            let boundary = line[tag_end..].chars().next();
            if boundary.is_some_and(|c| c.is_whitespace() || c == '>' || c == '/') {
                let class_at = line[tag_end..].find(CLASS_ATTR)?;
                return Some((tag_end, tag_end + class_at + CLASS_ATTR.len()));
            }
            from = tag_end;
        }
        None
    }

    /// `onClick` attribute value for `key`, braces included.
    pub fn click_handler(&self, key: &str) -> String {
        let SortBindings {
            key_var,
            set_key,
            set_dir,
            ..
        } = &self.options.bindings;
        match self.options.toggle {
            ToggleMode::AlwaysFlip => format!(
                "{{() => {{ {set_key}('{key}'); {set_dir}(s => s === 'asc' ? 'desc' : 'asc'); }}}}"
            ),
            ToggleMode::ResetOnChange => format!(
                "{{() => {{ {set_dir}(s => {key_var} === '{key}' ? (s === 'asc' ? 'desc' : 'asc') : 'asc'); {set_key}('{key}'); }}}}"
            ),
        }
    }

    /// Conditional glyph fragment placed before the closing tag.
    pub fn sort_indicator(&self, key: &str) -> String {
        let SortBindings {
            key_var, dir_var, ..
        } = &self.options.bindings;
        format!("{{{key_var} === '{key}' ? ({dir_var} === 'asc' ? ' ▲' : ' ▼') : ''}}")
    }

    /// Rewrite a single line.
    pub fn augment_line<'a>(&self, line: &'a str) -> AugmentedLine<'a> {
        let Some(found) = pattern::extract(line) else {
            return AugmentedLine::unchanged(line, LineOutcome::Passthrough);
        };
        let already_handled = line.contains("onClick=");
        let outcome_for = |outcome, text| AugmentedLine {
            outcome,
            key: Some(found.key),
            receiver: found.receiver,
            already_handled,
            text,
        };

        if self.is_excluded(found.key) {
            trace!(key = found.key, "excluded column");
            return outcome_for(LineOutcome::Excluded, Cow::Borrowed(line));
        }
        let Some((tag_end, class_at)) = self.locate(line) else {
            return outcome_for(LineOutcome::TagMismatch, Cow::Borrowed(line));
        };
        if already_handled {
            debug!(key = found.key, "line already has a click handler, adding another");
        }

        let tag = self.options.tag.as_str();
        let rest = &line[class_at..];
        let mut out = String::with_capacity(line.len() + 192);
        out.push_str(&line[..tag_end]);
        out.push_str(" onClick=");
        out.push_str(&self.click_handler(found.key));
        out.push_str(&line[tag_end..class_at]);
        out.push_str(CURSOR_CLASS);
        out.push(' ');
        match rest.find(&self.close) {
            Some(close_at) => {
                out.push_str(&rest[..close_at]);
                out.push_str(&self.sort_indicator(found.key));
                out.push_str(&rest[close_at..]);
            }
            None => {
                debug!(key = found.key, tag, "no closing tag, glyph not inserted");
                out.push_str(rest);
            }
        }
        trace!(key = found.key, "augmented column");
        outcome_for(LineOutcome::Augmented, Cow::Owned(out))
    }

    /// Lazily rewrite `lines`, one output line per input line, in order.
    pub fn augment_lines<'a, I>(&'a self, lines: I) -> impl Iterator<Item = AugmentedLine<'a>>
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: 'a,
    {
        lines.into_iter().map(move |line| self.augment_line(line))
    }

    /// Rewrite a whole block and collect the run report.
    pub fn augment_block(&self, block: &str) -> Rendered {
        let mut report = RunReport::new(self.options.prefs.clone());
        let mut lines = Vec::new();
        for (index, line) in self.augment_lines(split_lines(block)).enumerate() {
            report.record(index + 1, &line);
            lines.push(line.text.into_owned());
        }
        Rendered { lines, report }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AGE: &str = r#"{columnPrefs.isColumnVisible('age') && <TableHead className="min-w-[80px] font-semibold">Age</TableHead>}"#;

    #[test]
    fn test_augment_age_line() {
        let augmenter = HeaderAugmenter::default();
        let line = augmenter.augment_line(AGE);
        assert_eq!(line.outcome, LineOutcome::Augmented);
        assert_eq!(line.key, Some("age"));
        insta::assert_snapshot!(line.text, @r#"{columnPrefs.isColumnVisible('age') && <TableHead onClick={() => { setSortKey('age'); setSortDir(s => s === 'asc' ? 'desc' : 'asc'); }} className="cursor-pointer min-w-[80px] font-semibold">Age{sortKey === 'age' ? (sortDir === 'asc' ? ' ▲' : ' ▼') : ''}</TableHead>}"#);
    }

    #[test]
    fn test_reset_on_change_handler() {
        let augmenter =
            HeaderAugmenter::new(AugmentOptions::default().with_toggle(ToggleMode::ResetOnChange));
        assert_eq!(
            augmenter.click_handler("age"),
            "{() => { setSortDir(s => sortKey === 'age' ? (s === 'asc' ? 'desc' : 'asc') : 'asc'); setSortKey('age'); }}"
        );
    }

    #[test]
    fn test_actions_is_untouched() {
        let line = r#"{columnPrefs.isColumnVisible('actions') && <TableHead className="sticky right-0">Actions</TableHead>}"#;
        let augmented = HeaderAugmenter::default().augment_line(line);
        assert_eq!(augmented.outcome, LineOutcome::Excluded);
        assert!(matches!(augmented.text, Cow::Borrowed(text) if text == line));
    }

    #[test]
    fn test_tag_mismatch_passes_through() {
        let augmenter = HeaderAugmenter::new(AugmentOptions::default().with_tag(CellTag::th()));
        let augmented = augmenter.augment_line(AGE);
        assert_eq!(augmented.outcome, LineOutcome::TagMismatch);
        assert_eq!(augmented.text, AGE);
        assert_eq!(augmenter.classify(AGE), LineOutcome::TagMismatch);
    }

    #[test]
    fn test_plain_th_variant() {
        let line = r#"{nutritionColumnPrefs.isColumnVisible('sampleId') && <th className="px-4">Sample ID</th>}"#;
        let augmenter = HeaderAugmenter::new(AugmentOptions::default().with_tag(CellTag::th()));
        let augmented = augmenter.augment_line(line);
        assert_eq!(augmented.outcome, LineOutcome::Augmented);
        assert!(augmented.text.contains(r#"<th onClick={() => { setSortKey('sampleId');"#));
        assert!(augmented.text.contains(r#"className="cursor-pointer px-4">Sample ID{sortKey === 'sampleId'"#));
        assert!(augmented.text.ends_with("</th>}"));
    }

    #[test]
    fn test_missing_close_tag_inserts_handler_only() {
        let line = r#"{isColumnVisible('age') && <TableHead className="x">Age"#;
        let augmented = HeaderAugmenter::default().augment_line(line);
        assert_eq!(augmented.outcome, LineOutcome::Augmented);
        assert!(augmented.text.contains("onClick="));
        assert!(!augmented.text.contains("sortKey === 'age'"));
    }

    #[test]
    fn test_custom_bindings() {
        let bindings = SortBindings {
            key_var: "orderBy".to_string(),
            dir_var: "order".to_string(),
            set_key: "setOrderBy".to_string(),
            set_dir: "setOrder".to_string(),
        };
        let augmenter = HeaderAugmenter::new(AugmentOptions {
            bindings,
            ..AugmentOptions::default()
        });
        assert_eq!(
            augmenter.sort_indicator("age"),
            "{orderBy === 'age' ? (order === 'asc' ? ' ▲' : ' ▼') : ''}"
        );
        assert!(augmenter.click_handler("age").contains("setOrderBy('age')"));
    }

    #[test]
    fn test_second_pass_is_flagged() {
        let augmenter = HeaderAugmenter::default();
        let first = augmenter.augment_line(AGE).text.into_owned();
        let second = augmenter.augment_line(&first);
        assert!(second.already_handled);
        assert_eq!(second.outcome, LineOutcome::Augmented);
        assert_eq!(second.text.matches("onClick=").count(), 2);
        assert_eq!(second.text.matches("cursor-pointer ").count(), 2);
        assert_eq!(second.text.matches("{sortKey === 'age'").count(), 2);

        let report = augmenter.augment_block(&first).report;
        assert_eq!(report.augmented, 1);
        assert_eq!(report.tag_mismatch, 0);
        assert_eq!(report.already_handled, vec![1]);
    }

    #[test]
    fn test_tag_name_prefix_is_not_a_match() {
        let line = r#"{isColumnVisible('age') && <thead className="x"><th className="w">Age</th></thead>}"#;
        let augmenter = HeaderAugmenter::new(AugmentOptions::default().with_tag(CellTag::th()));
        let augmented = augmenter.augment_line(line);
        assert_eq!(augmented.outcome, LineOutcome::Augmented);
        assert!(augmented.text.contains(r#"<thead className="x"><th onClick="#));
        assert!(augmented.text.contains(r#"className="cursor-pointer w">Age{sortKey"#));
    }

    #[test]
    fn test_crlf_lines_keep_carriage_return() {
        let unchanged = "  <TableRow>\r\n{p.isColumnVisible('actions') && <TableHead className=\"a\">Actions</TableHead>}\r\n";
        let block = format!("{unchanged}{AGE}\r\n");
        let rendered = HeaderAugmenter::default().augment_block(&block);
        assert_eq!(rendered.lines.len(), 3);
        assert_eq!(rendered.lines[0], "  <TableRow>\r");
        assert!(rendered.lines[2].ends_with("</TableHead>}\r"));
        assert!(rendered.to_text().starts_with(unchanged));
        assert!(rendered.to_text().ends_with("</TableHead>}\r\n"));
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\r\n\nb").collect::<Vec<_>>(), vec!["a\r", "", "b"]);
        assert_eq!(split_lines("a\n").collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn test_rendered_to_text() {
        let rendered = HeaderAugmenter::default().augment_block("a\n\nb");
        assert_eq!(rendered.to_text(), "a\n\nb\n");
        assert_eq!(rendered.report.total, 3);
        let empty = HeaderAugmenter::default().augment_block("");
        assert_eq!(empty.to_text(), "");
    }
}
