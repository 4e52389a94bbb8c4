// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process runner backed by `std::process`

use cronplan_core::runner::{ProcessRunner, RunError, RunOutput};
use std::process::Command;

/// Runs the external crontab binary
///
/// `argv[0]` is spawned directly with the remaining tokens as arguments;
/// nothing goes through a shell. Both output streams are captured and
/// split into lines. Blocking, no timeout.
#[derive(Clone, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> Result<RunOutput, RunError> {
        let (program, args) = argv.split_first().ok_or(RunError::EmptyArgv)?;

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| RunError::Io {
                command: program.clone(),
                source,
            })?;

        Ok(RunOutput {
            status: output.status.code(),
            stdout_lines: split_lines(&output.stdout),
            stderr_lines: split_lines(&output.stderr),
        })
    }
}

fn split_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod tests;
