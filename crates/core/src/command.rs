// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed argv templates for crontab invocations
//!
//! Commands are argument vectors, never shell strings: each token expands
//! its placeholders and the vector goes to the process runner as-is, so no
//! table content or username ever meets a shell. OS-distribution quirks are
//! handled by overriding the vectors, not the pipeline.

use crate::error::CronTabError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

// Regex pattern for {placeholder} tokens left over after expansion
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_-]*)\}").expect("constant regex pattern is valid")
});

/// Argv templates for the three crontab invocations
///
/// Placeholders: `{crontab}` expands to the configured binary and `{file}`
/// to the table file path, inside any token. A token that is exactly
/// `{user}` becomes the two-token `-u <name>` pair, or disappears entirely
/// when no username is configured. Any placeholder still present after
/// expansion is a configuration error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandTemplates {
    /// Path or name of the crontab binary
    pub crontab_bin: String,
    /// Listing the current table
    pub list: Vec<String>,
    /// Installing a table file
    pub install: Vec<String>,
    /// Removing the whole table
    pub remove_all: Vec<String>,
    /// First-line prefix announcing that no table exists
    pub not_found_phrase: String,
}

impl Default for CommandTemplates {
    fn default() -> Self {
        Self {
            crontab_bin: "crontab".to_string(),
            list: template(&["{crontab}", "-l", "{user}"]),
            install: template(&["{crontab}", "{user}", "{file}"]),
            remove_all: template(&["{crontab}", "{user}", "-r"]),
            not_found_phrase: "no crontab".to_string(),
        }
    }
}

fn template(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

impl CommandTemplates {
    /// Argv for listing `username`'s table
    pub fn render_list(&self, username: &str) -> Result<Vec<String>, CronTabError> {
        render(&self.list, &self.crontab_bin, username, None)
    }

    /// Argv for installing the table file at `file`
    pub fn render_install(&self, username: &str, file: &Path) -> Result<Vec<String>, CronTabError> {
        render(&self.install, &self.crontab_bin, username, Some(file))
    }

    /// Argv for removing `username`'s whole table
    pub fn render_remove_all(&self, username: &str) -> Result<Vec<String>, CronTabError> {
        render(&self.remove_all, &self.crontab_bin, username, None)
    }

    /// Whether `line` is the "no table exists" notice (case-insensitive
    /// prefix match)
    pub fn is_not_found(&self, line: &str) -> bool {
        let phrase = self.not_found_phrase.as_str();
        !phrase.is_empty()
            && line
                .get(..phrase.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(phrase))
    }
}

fn render(
    tokens: &[String],
    bin: &str,
    username: &str,
    file: Option<&Path>,
) -> Result<Vec<String>, CronTabError> {
    let mut argv = Vec::with_capacity(tokens.len() + 1);
    for token in tokens {
        if token == "{user}" {
            if !username.is_empty() {
                argv.push("-u".to_string());
                argv.push(username.to_string());
            }
            continue;
        }

        let mut expanded = token.replace("{crontab}", bin);
        if let Some(file) = file {
            expanded = expanded.replace("{file}", &file.display().to_string());
        }
        if let Some(caps) = PLACEHOLDER.captures(&expanded) {
            return Err(CronTabError::BadTemplate(caps[1].to_string()));
        }
        argv.push(expanded);
    }
    Ok(argv)
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
