// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cronplan current` - Print the live table for the plan's user

use crate::plan::Plan;
use anyhow::Result;

pub fn run(plan: &Plan) -> Result<()> {
    let tab = plan.manager(super::system_runner());
    for line in tab.current_lines()? {
        println!("{line}");
    }
    Ok(())
}
