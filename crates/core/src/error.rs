// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for crontab operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by crontab operations
///
/// Raised synchronously by the triggering operation; nothing is retried or
/// swallowed. The "no crontab" sentinel is not an error (it reads as an
/// empty table).
#[derive(Debug, Error)]
pub enum CronTabError {
    /// A job spec cannot produce a table line (caller error, raised before
    /// any external side effect)
    #[error("invalid job spec: {0}")]
    InvalidJobSpec(String),

    /// Listing the current table produced unrecognized error output
    #[error("failed to read crontab: {0}")]
    ReadFailure(String),

    /// The install (or remove) invocation reported failure
    #[error("Failure to setup crontab from file: {0}")]
    ApplyFailure(String),

    /// A table file could not be written
    #[error("failed to write table file {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A command template kept an unknown placeholder after expansion
    #[error("unresolved placeholder {{{0}}} in command template")]
    BadTemplate(String),
}
