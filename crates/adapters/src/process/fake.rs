// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake crontab runner for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use cronplan_core::runner::{ProcessRunner, RunError, RunOutput};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Recorded crontab invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrontabCall {
    List { user: String },
    Install { user: String, content: String },
    RemoveAll { user: String },
}

/// Shared state for the fake crontab
#[derive(Default)]
struct FakeState {
    /// Installed table file content per user; empty user key is the
    /// current process user
    tables: HashMap<String, String>,
    calls: Vec<CrontabCall>,
    // Configurable failure modes
    install_fails: bool,
    list_fails: bool,
}

/// In-memory crontab emulator with call recording
///
/// Understands the argv shapes the templates produce: `-l` lists, `-r`
/// removes the table, `-u <name>` selects the user, and a bare token is
/// the table file to install. Keeps one table per user so a full
/// apply/remove cycle behaves like the real binary would.
#[derive(Clone, Default)]
pub struct FakeCrontab {
    state: Arc<Mutex<FakeState>>,
}

enum Op {
    List,
    Install(String),
    RemoveAll,
}

impl FakeCrontab {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<CrontabCall> {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).calls.clone()
    }

    /// Installed table content for `user`, if a table exists
    pub fn table(&self, user: &str) -> Option<String> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .tables
            .get(user)
            .cloned()
    }

    /// Pre-install a table, as if another writer had set it up
    pub fn seed_table(&self, user: &str, content: &str) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .tables
            .insert(user.to_string(), content.to_string());
    }

    /// Make install invocations fail with a permission error
    pub fn set_install_fails(&self, fails: bool) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).install_fails = fails;
    }

    /// Make list invocations fail with an unrecognized error
    pub fn set_list_fails(&self, fails: bool) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).list_fails = fails;
    }
}

impl ProcessRunner for FakeCrontab {
    fn run(&self, argv: &[String]) -> Result<RunOutput, RunError> {
        let (_, args) = argv.split_first().ok_or(RunError::EmptyArgv)?;

        let mut user = String::new();
        let mut op = None;
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-u" => user = iter.next().cloned().unwrap_or_default(),
                "-l" => op = Some(Op::List),
                "-r" => op = Some(Op::RemoveAll),
                file => op = Some(Op::Install(file.to_string())),
            }
        }

        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match op {
            Some(Op::List) => {
                state.calls.push(CrontabCall::List { user: user.clone() });
                if state.list_fails {
                    return Ok(failure(2, "crontab: internal error"));
                }
                match state.tables.get(&user) {
                    Some(content) => Ok(RunOutput {
                        status: Some(0),
                        stdout_lines: content.lines().map(str::to_string).collect(),
                        stderr_lines: Vec::new(),
                    }),
                    None => Ok(not_found(&user)),
                }
            }
            Some(Op::Install(file)) => {
                let content = match std::fs::read_to_string(&file) {
                    Ok(content) => content,
                    Err(err) => return Ok(failure(1, &format!("crontab: {file}: {err}"))),
                };
                state.calls.push(CrontabCall::Install {
                    user: user.clone(),
                    content: content.clone(),
                });
                if state.install_fails {
                    return Ok(failure(1, "crontab: installation rejected"));
                }
                state.tables.insert(user, content);
                Ok(success())
            }
            Some(Op::RemoveAll) => {
                state.calls.push(CrontabCall::RemoveAll { user: user.clone() });
                if state.tables.remove(&user).is_none() {
                    return Ok(not_found(&user));
                }
                Ok(success())
            }
            None => Ok(failure(1, "crontab: usage error: no operation given")),
        }
    }
}

fn success() -> RunOutput {
    RunOutput {
        status: Some(0),
        stdout_lines: Vec::new(),
        stderr_lines: Vec::new(),
    }
}

fn failure(code: i32, message: &str) -> RunOutput {
    RunOutput {
        status: Some(code),
        stdout_lines: Vec::new(),
        stderr_lines: vec![message.to_string()],
    }
}

fn not_found(user: &str) -> RunOutput {
    let who = if user.is_empty() { "you" } else { user };
    failure(1, &format!("no crontab for {who}"))
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
