// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job specifications and scheduler-table line composition
//!
//! A [`JobSpec`] is either five opaque time fields plus a command, or a raw
//! pre-composed table line. Composition joins the fields in fixed order with
//! single spaces; no validation of the cron field syntax is performed.

use crate::error::CronTabError;
use serde::{Deserialize, Serialize};

/// One desired scheduler-table entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobSpec {
    /// Minute field, `*` when absent
    pub min: Option<String>,
    /// Hour field, `*` when absent
    pub hour: Option<String>,
    /// Day-of-month field, `*` when absent
    pub day_of_month: Option<String>,
    /// Month field, `*` when absent
    pub month: Option<String>,
    /// Day-of-week field, `*` when absent
    pub day_of_week: Option<String>,
    /// Command text, required unless `line` is given. Used unquoted.
    pub command: Option<String>,
    /// Raw table line used verbatim, bypassing field composition
    pub line: Option<String>,
}

impl JobSpec {
    /// Spec running `command`, every time field defaulted
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            ..Self::default()
        }
    }

    /// Spec carrying a raw pre-composed line
    pub fn raw(line: impl Into<String>) -> Self {
        Self {
            line: Some(line.into()),
            ..Self::default()
        }
    }

    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn with_hour(mut self, hour: impl Into<String>) -> Self {
        self.hour = Some(hour.into());
        self
    }

    pub fn with_day_of_month(mut self, day: impl Into<String>) -> Self {
        self.day_of_month = Some(day.into());
        self
    }

    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    pub fn with_day_of_week(mut self, day: impl Into<String>) -> Self {
        self.day_of_week = Some(day.into());
        self
    }

    /// Compose the table line for this spec
    ///
    /// A non-empty `line` wins and is returned verbatim. Otherwise the five
    /// time fields (absent ones as `*`) and the command are joined with
    /// single spaces. A spec with neither a raw line nor a command cannot
    /// produce an entry and fails with [`CronTabError::InvalidJobSpec`].
    pub fn compose_line(&self) -> Result<String, CronTabError> {
        if let Some(line) = self.line.as_deref() {
            if !line.is_empty() {
                return Ok(line.to_string());
            }
        }

        let command = match self.command.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => {
                return Err(CronTabError::InvalidJobSpec(
                    "neither a command nor a raw line is set".to_string(),
                ))
            }
        };

        let field = |f: &Option<String>| f.clone().unwrap_or_else(|| "*".to_string());
        Ok(format!(
            "{} {} {} {} {} {}",
            field(&self.min),
            field(&self.hour),
            field(&self.day_of_month),
            field(&self.month),
            field(&self.day_of_week),
            command
        ))
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
