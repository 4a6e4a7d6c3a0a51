//! Per-run counts and diagnostics for an augmented block.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::warn;

use crate::augment::{AugmentedLine, LineOutcome};

/// Where a column marker was called on an unexpected variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiverMismatch {
    pub line: usize,
    pub key: String,
    pub found: String,
}

/// Summary of one augmentation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub total: usize,
    pub passthrough: usize,
    pub excluded: usize,
    pub augmented: usize,
    pub tag_mismatch: usize,
    /// Recognized keys in header order.
    pub columns: Vec<ColumnEntry>,
    pub duplicates: Vec<String>,
    pub receiver_mismatches: Vec<ReceiverMismatch>,
    /// Line numbers whose input already had an `onClick`.
    pub already_handled: Vec<usize>,
    #[serde(skip)]
    expected_prefs: Option<String>,
    #[serde(skip)]
    seen: BTreeSet<String>,
}

/// A recognized column and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnEntry {
    pub line: usize,
    pub key: String,
    pub outcome: LineOutcome,
}

impl RunReport {
    #[must_use]
    pub fn new(expected_prefs: Option<String>) -> Self {
        Self {
            expected_prefs,
            ..Self::default()
        }
    }

    /// Account for output line `line` (1-based).
    pub fn record(&mut self, line: usize, augmented: &AugmentedLine<'_>) {
        self.total += 1;
        match augmented.outcome {
            LineOutcome::Passthrough => self.passthrough += 1,
            LineOutcome::Excluded => self.excluded += 1,
            LineOutcome::Augmented => self.augmented += 1,
            LineOutcome::TagMismatch => {
                self.tag_mismatch += 1;
                warn!(line, key = augmented.key, "column marker without a matching cell tag");
            }
        }
        let Some(key) = augmented.key else {
            return;
        };
        if !self.seen.insert(key.to_string()) {
            warn!(line, key, "duplicate column key");
            self.duplicates.push(key.to_string());
        }
        if augmented.already_handled {
            warn!(line, key, "line already has a click handler");
            self.already_handled.push(line);
        }
        if let (Some(expected), Some(found)) = (&self.expected_prefs, augmented.receiver)
            && expected != found
        {
            warn!(line, key, expected = %expected, found, "unexpected visibility lookup variable");
            self.receiver_mismatches.push(ReceiverMismatch {
                line,
                key: key.to_string(),
                found: found.to_string(),
            });
        }
        self.columns.push(ColumnEntry {
            line,
            key: key.to_string(),
            outcome: augmented.outcome,
        });
    }

    /// Keys in header order.
    pub fn column_keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|entry| entry.key.as_str())
    }

    /// True when the run produced nothing worth a second look.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.tag_mismatch == 0
            && self.duplicates.is_empty()
            && self.receiver_mismatches.is_empty()
            && self.already_handled.is_empty()
    }
}
