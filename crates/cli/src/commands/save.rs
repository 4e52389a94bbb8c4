// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cronplan save` - Write the composed table to a file

use crate::plan::Plan;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct SaveArgs {
    /// Destination file for the composed table
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(plan: &Plan, args: &SaveArgs) -> Result<()> {
    let tab = plan.manager(super::system_runner());
    tab.save_to_file(&args.out)?;
    println!("Table written to {}", args.out.display());
    Ok(())
}
