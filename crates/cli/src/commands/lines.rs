// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cronplan lines` - Print the composed lines without touching the table

use crate::plan::Plan;
use anyhow::Result;

pub fn run(plan: &Plan) -> Result<()> {
    let tab = plan.manager(super::system_runner());
    for line in tab.lines()? {
        println!("{line}");
    }
    Ok(())
}
