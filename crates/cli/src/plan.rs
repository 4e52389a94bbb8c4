// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plan file loading
//!
//! A plan is the TOML description of one crontab: configuration plus the
//! desired jobs. The library stays plan-file-agnostic; this module maps the
//! file onto `CronTabConfig` and the job list.

use anyhow::{Context, Result};
use cronplan_core::runner::ProcessRunner;
use cronplan_core::{CommandTemplates, CronTab, CronTabConfig, JobSpec, MergeFilter};
use serde::Deserialize;
use std::path::Path;

/// Deserialized plan file
///
/// Unknown keys are rejected so a typo fails loudly instead of silently
/// falling back to a default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Plan {
    /// Target user; empty means the current process user
    pub username: String,
    /// Literal lines placed before the job entries
    pub head_lines: Vec<String>,
    /// Existing lines containing this substring are dropped during merge
    pub merge_filter: Option<String>,
    /// Path or name of the crontab binary
    pub crontab_bin: Option<String>,
    /// Template vector overrides, for distributions whose crontab differs
    pub list: Option<Vec<String>>,
    pub install: Option<Vec<String>>,
    pub remove_all: Option<Vec<String>>,
    /// First-line prefix announcing that no table exists
    pub not_found_phrase: Option<String>,
    /// Desired jobs, applied in file order
    pub jobs: Vec<JobSpec>,
}

impl Plan {
    /// Load and parse the plan file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read plan file {}", path.display()))?;
        let plan =
            toml::from_str(&content).with_context(|| format!("invalid plan file {}", path.display()))?;
        Ok(plan)
    }

    /// Library configuration described by this plan
    pub fn config(&self) -> CronTabConfig {
        let mut commands = CommandTemplates::default();
        if let Some(bin) = &self.crontab_bin {
            commands.crontab_bin = bin.clone();
        }
        if let Some(list) = &self.list {
            commands.list = list.clone();
        }
        if let Some(install) = &self.install {
            commands.install = install.clone();
        }
        if let Some(remove_all) = &self.remove_all {
            commands.remove_all = remove_all.clone();
        }
        if let Some(phrase) = &self.not_found_phrase {
            commands.not_found_phrase = phrase.clone();
        }

        let merge_filter = match &self.merge_filter {
            Some(needle) => MergeFilter::substring(needle.clone()),
            None => MergeFilter::None,
        };

        CronTabConfig::new()
            .with_username(self.username.clone())
            .with_head_lines(self.head_lines.clone())
            .with_merge_filter(merge_filter)
            .with_commands(commands)
    }

    /// Manager over `runner` carrying this plan's config and jobs
    pub fn manager<R: ProcessRunner>(&self, runner: R) -> CronTab<R> {
        let mut tab = CronTab::new(self.config(), runner);
        tab.set_jobs(self.jobs.clone());
        tab
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
