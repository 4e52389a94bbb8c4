// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod apply;
pub mod current;
pub mod install;
pub mod lines;
pub mod remove;
pub mod save;
pub mod wipe;

use cronplan_adapters::{SystemRunner, TracedRunner};

/// Runner every live invocation goes through
pub(crate) fn system_runner() -> TracedRunner<SystemRunner> {
    TracedRunner::new(SystemRunner::new())
}
