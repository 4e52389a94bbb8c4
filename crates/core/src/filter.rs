// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Merge filters selecting existing lines to drop during reconciliation

use std::fmt;
use std::sync::Arc;

/// Predicate over one existing table line
///
/// Matching lines are dropped during merge, independent of whether the
/// desired set replaces them.
#[derive(Clone, Default)]
pub enum MergeFilter {
    /// Keep every existing line
    #[default]
    None,
    /// Drop lines containing this substring
    Substring(String),
    /// Drop lines the function returns true for
    Predicate(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl MergeFilter {
    /// Filter dropping lines that contain `needle`
    pub fn substring(needle: impl Into<String>) -> Self {
        Self::Substring(needle.into())
    }

    /// Filter dropping lines `f` returns true for
    pub fn predicate(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Arc::new(f))
    }

    /// Whether `line` should be dropped
    pub fn matches(&self, line: &str) -> bool {
        match self {
            Self::None => false,
            Self::Substring(needle) => line.contains(needle.as_str()),
            Self::Predicate(f) => f(line),
        }
    }
}

impl fmt::Debug for MergeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Substring(needle) => f.debug_tuple("Substring").field(needle).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
