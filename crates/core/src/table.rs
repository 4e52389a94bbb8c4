// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Table snapshots and the merge algorithm
//!
//! The merge is what lets managed jobs coexist with entries the user (or
//! other tooling) put in the table by hand: foreign lines survive untouched,
//! reapplied lines move to the end instead of duplicating, and the configured
//! filter can evict lines unconditionally.

use crate::filter::MergeFilter;

/// The table content for one user at one point in time
///
/// Always fetched fresh, never cached. Lines are opaque; listing output is
/// normalized on construction (trimmed, blanks dropped) so the writer's
/// canonical padding is never read back as content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSnapshot {
    lines: Vec<String>,
}

impl TableSnapshot {
    /// Snapshot of a user with no table installed
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalize raw listing output into a snapshot
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(|line| line.as_ref().trim().to_string())
                .filter(|line| !line.is_empty())
                .collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

/// Merge `desired` lines into `existing` ones
///
/// Existing lines keep their relative order. An existing line is dropped
/// when the filter matches it, or when it appears verbatim in `desired`
/// (that duplicate-drop is what makes repeated applies idempotent). All
/// desired lines are then appended in their given order.
pub fn merge(existing: &[String], desired: &[String], filter: &MergeFilter) -> Vec<String> {
    let mut merged: Vec<String> = existing
        .iter()
        .filter(|line| !filter.matches(line) && !desired.contains(line))
        .cloned()
        .collect();
    merged.extend(desired.iter().cloned());
    merged
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
