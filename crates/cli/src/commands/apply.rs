// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cronplan apply` - Apply the plan's jobs to the live table

use crate::plan::Plan;
use anyhow::Result;

pub fn run(plan: &Plan) -> Result<()> {
    let tab = plan.manager(super::system_runner());
    let table = tab.apply()?;
    println!("Crontab applied: {} lines live", table.len());
    Ok(())
}
