// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced runner wrapper for consistent observability

use cronplan_core::runner::{ProcessRunner, RunError, RunOutput};

/// Wrapper that adds tracing to any ProcessRunner
#[derive(Debug, Clone)]
pub struct TracedRunner<R> {
    inner: R,
}

impl<R> TracedRunner<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: ProcessRunner> ProcessRunner for TracedRunner<R> {
    fn run(&self, argv: &[String]) -> Result<RunOutput, RunError> {
        let command = argv.join(" ");
        let span = tracing::info_span!("crontab.run", command = %command);
        let _guard = span.enter();

        tracing::debug!("starting");

        let start = std::time::Instant::now();
        let result = self.inner.run(argv);
        let elapsed = start.elapsed();

        match &result {
            Ok(output) => tracing::info!(
                status = ?output.status,
                elapsed_ms = elapsed.as_millis() as u64,
                "finished"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "failed to launch"
            ),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
