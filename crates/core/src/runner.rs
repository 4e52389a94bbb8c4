// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-runner seam for external crontab invocations

use thiserror::Error;

/// Errors from launching the external binary
///
/// A `RunError` means the process could not be spawned or awaited at all; a
/// nonzero exit is a normal [`RunOutput`], interpreted by the caller.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot run an empty command template")]
    EmptyArgv,
    #[error("failed to run {command}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Captured result of one external invocation
#[derive(Debug, Clone, Default)]
pub struct RunOutput {
    /// Exit code; `None` when the process was terminated by a signal
    pub status: Option<i32>,
    pub stdout_lines: Vec<String>,
    pub stderr_lines: Vec<String>,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// First non-blank output line, stderr before stdout
    ///
    /// The "no crontab" notice lands on stderr with most cron
    /// implementations, on stdout with a few.
    pub fn first_line(&self) -> Option<&str> {
        self.stderr_lines
            .iter()
            .chain(self.stdout_lines.iter())
            .map(|line| line.trim())
            .find(|line| !line.is_empty())
    }

    /// Raw error output for diagnostics, stderr preferred
    pub fn diagnostics(&self) -> String {
        if self.stderr_lines.is_empty() {
            self.stdout_lines.join("\n")
        } else {
            self.stderr_lines.join("\n")
        }
    }

    pub fn status_text(&self) -> String {
        match self.status {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Executes one argv and captures its output
///
/// `argv[0]` is the program; the rest are its arguments. Implementations
/// must not route through a shell.
pub trait ProcessRunner: Send + Sync {
    fn run(&self, argv: &[String]) -> Result<RunOutput, RunError>;
}
