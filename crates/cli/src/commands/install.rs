// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cronplan install` - Install a prepared table file directly

use crate::plan::Plan;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct InstallArgs {
    /// Table file installed as-is, skipping compose and merge
    pub file: PathBuf,
}

pub fn run(plan: &Plan, args: &InstallArgs) -> Result<()> {
    let tab = plan.manager(super::system_runner());
    let table = tab.apply_file(&args.file)?;
    println!("Crontab installed: {} lines live", table.len());
    Ok(())
}
