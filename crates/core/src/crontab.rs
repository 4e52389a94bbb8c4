// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `CronTab` applier
//!
//! Orchestrates the pipeline: compose the desired lines, read the current
//! table, merge, serialize, install through the external binary, re-read to
//! verify. Runs synchronously; every suspension point is a blocking process
//! invocation or file write.

use crate::command::CommandTemplates;
use crate::error::CronTabError;
use crate::filter::MergeFilter;
use crate::job::JobSpec;
use crate::runner::ProcessRunner;
use crate::table::{self, TableSnapshot};
use crate::writer;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Configuration for a [`CronTab`]
///
/// Constant for the manager's lifetime unless the caller reassigns it
/// between operations.
#[derive(Debug, Clone, Default)]
pub struct CronTabConfig {
    /// Target user; empty means the current process user
    pub username: String,
    /// Literal lines placed before the job entries
    pub head_lines: Vec<String>,
    /// Which existing lines to evict during merge
    pub merge_filter: MergeFilter,
    /// Argv templates and the no-table sentinel phrase
    pub commands: CommandTemplates,
}

impl CronTabConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_head_lines(mut self, head_lines: Vec<String>) -> Self {
        self.head_lines = head_lines;
        self
    }

    pub fn with_merge_filter(mut self, filter: MergeFilter) -> Self {
        self.merge_filter = filter;
        self
    }

    pub fn with_commands(mut self, commands: CommandTemplates) -> Self {
        self.commands = commands;
        self
    }
}

/// Manager for one user's scheduler table
///
/// Holds the desired job list plus configuration; the live table is always
/// fetched fresh through the runner, never cached.
#[derive(Debug, Clone)]
pub struct CronTab<R> {
    config: CronTabConfig,
    jobs: Vec<JobSpec>,
    runner: R,
}

impl<R: ProcessRunner> CronTab<R> {
    pub fn new(config: CronTabConfig, runner: R) -> Self {
        Self {
            config,
            jobs: Vec::new(),
            runner,
        }
    }

    pub fn config(&self) -> &CronTabConfig {
        &self.config
    }

    pub fn jobs(&self) -> &[JobSpec] {
        &self.jobs
    }

    pub fn set_jobs(&mut self, jobs: Vec<JobSpec>) {
        self.jobs = jobs;
    }

    /// Composed desired lines, not yet applied anywhere
    pub fn lines(&self) -> Result<Vec<String>, CronTabError> {
        self.jobs
            .iter()
            .enumerate()
            .map(|(index, job)| {
                job.compose_line().map_err(|err| match err {
                    CronTabError::InvalidJobSpec(reason) => {
                        CronTabError::InvalidJobSpec(format!("job {index}: {reason}"))
                    }
                    other => other,
                })
            })
            .collect()
    }

    /// Live table for the configured user, freshly read
    pub fn current_lines(&self) -> Result<Vec<String>, CronTabError> {
        Ok(self.read_table()?.into_lines())
    }

    /// Apply the configured jobs to the live table
    ///
    /// Composes every job up front (an invalid spec fails before any side
    /// effect), merges into the current table, installs the serialized
    /// result, and re-reads. The install's own exit status is authoritative:
    /// lines missing from the re-read only log a warning. The returned
    /// snapshot is the fresh read, or the expected content when the re-read
    /// itself fails.
    pub fn apply(&self) -> Result<TableSnapshot, CronTabError> {
        let desired = self.lines()?;
        tracing::debug!(jobs = desired.len(), "composed desired lines");

        let current = self.read_table()?;
        tracing::debug!(existing = current.len(), "read current table");

        let merged = self.merge_with_head(current, &desired);
        tracing::debug!(merged = merged.len(), "merged table");

        let blob = writer::serialize(&self.config.head_lines, &merged);
        self.install_blob(&blob)?;

        Ok(self.verify(&merged))
    }

    /// Install a prepared table file directly, skipping compose and merge
    pub fn apply_file(&self, path: &Path) -> Result<TableSnapshot, CronTabError> {
        if !path.exists() {
            return Err(CronTabError::ApplyFailure(format!(
                "{}: file not found",
                path.display()
            )));
        }

        let expected = match std::fs::read_to_string(path) {
            Ok(content) => TableSnapshot::from_lines(content.lines()).into_lines(),
            Err(_) => Vec::new(),
        };

        self.install_file(path)?;
        Ok(self.verify(&expected))
    }

    /// Remove the configured jobs from the live table
    ///
    /// Exact-line set difference, independent of the merge filter. Falls
    /// back to [`Self::remove_all`] when nothing would remain.
    pub fn remove(&self) -> Result<(), CronTabError> {
        let targets = self.lines()?;
        let current = self.read_table()?;

        let head = &self.config.head_lines;
        let remaining: Vec<String> = current
            .into_lines()
            .into_iter()
            .filter(|line| !targets.contains(line) && !head.contains(line))
            .collect();

        if remaining.is_empty() {
            tracing::debug!("no lines would remain, removing whole table");
            return self.remove_all();
        }

        let blob = writer::serialize(head, &remaining);
        self.install_blob(&blob)
    }

    /// Remove the user's entire table
    pub fn remove_all(&self) -> Result<(), CronTabError> {
        let argv = self.config.commands.render_remove_all(&self.config.username)?;
        let output = self
            .runner
            .run(&argv)
            .map_err(|err| CronTabError::ApplyFailure(err.to_string()))?;

        if output.success() {
            return Ok(());
        }
        // Removing a table that does not exist is not a failure
        if output
            .first_line()
            .is_some_and(|line| self.config.commands.is_not_found(line))
        {
            return Ok(());
        }
        Err(CronTabError::ApplyFailure(format!(
            "remove-all {}: {}",
            output.status_text(),
            output.diagnostics()
        )))
    }

    /// Write the composed table (head block included) to `path`
    ///
    /// No read, no merge: exactly the blob this plan would install into an
    /// empty table. Zero jobs and no head lines write an empty file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), CronTabError> {
        let lines = self.lines()?;
        let blob = writer::serialize(&self.config.head_lines, &lines);
        std::fs::write(path, blob).map_err(|source| CronTabError::WriteFailure {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read_table(&self) -> Result<TableSnapshot, CronTabError> {
        let argv = self.config.commands.render_list(&self.config.username)?;
        let output = self
            .runner
            .run(&argv)
            .map_err(|err| CronTabError::ReadFailure(err.to_string()))?;

        // The sentinel wins regardless of exit status: most crontabs report
        // a missing table on stderr with exit 1, a few on stdout with exit 0
        if let Some(first) = output.first_line() {
            if self.config.commands.is_not_found(first) {
                return Ok(TableSnapshot::empty());
            }
        }
        if !output.success() {
            return Err(CronTabError::ReadFailure(format!(
                "{}: {}",
                output.status_text(),
                output.diagnostics()
            )));
        }
        Ok(TableSnapshot::from_lines(&output.stdout_lines))
    }

    // Head directives read back as ordinary table lines; drop them before
    // merging or every apply would stack another head block on top
    fn merge_with_head(&self, current: TableSnapshot, desired: &[String]) -> Vec<String> {
        let head = &self.config.head_lines;
        let existing: Vec<String> = current
            .into_lines()
            .into_iter()
            .filter(|line| !head.contains(line))
            .collect();
        table::merge(&existing, desired, &self.config.merge_filter)
    }

    fn install_blob(&self, blob: &str) -> Result<(), CronTabError> {
        let mut file = NamedTempFile::new().map_err(|source| CronTabError::WriteFailure {
            path: std::env::temp_dir(),
            source,
        })?;
        file.write_all(blob.as_bytes())
            .map_err(|source| CronTabError::WriteFailure {
                path: file.path().to_path_buf(),
                source,
            })?;
        // Temp file is deleted when `file` drops
        self.install_file(file.path())
    }

    fn install_file(&self, path: &Path) -> Result<(), CronTabError> {
        let argv = self
            .config
            .commands
            .render_install(&self.config.username, path)?;
        let output = self
            .runner
            .run(&argv)
            .map_err(|err| CronTabError::ApplyFailure(err.to_string()))?;

        if !output.success() {
            return Err(CronTabError::ApplyFailure(format!(
                "{}: {}: {}",
                path.display(),
                output.status_text(),
                output.diagnostics()
            )));
        }
        tracing::debug!(file = %path.display(), "table installed");
        Ok(())
    }

    fn verify(&self, expected: &[String]) -> TableSnapshot {
        let fresh = match self.read_table() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(error = %err, "verification read failed");
                TableSnapshot::from_lines(expected)
            }
        };
        for line in expected {
            if !fresh.contains(line) {
                tracing::warn!(line = %line, "installed line missing from fresh table");
            }
        }
        fresh
    }
}

#[cfg(test)]
#[path = "crontab_tests.rs"]
mod tests;
