// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cronplan remove` - Remove the plan's jobs from the live table

use crate::plan::Plan;
use anyhow::Result;

pub fn run(plan: &Plan) -> Result<()> {
    let tab = plan.manager(super::system_runner());
    tab.remove()?;
    println!("Plan jobs removed");
    Ok(())
}
