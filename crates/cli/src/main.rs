// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! cronplan - Plan-driven crontab management

mod commands;
mod plan;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{apply, current, install, lines, remove, save, wipe};
use std::path::PathBuf;

use crate::plan::Plan;

#[derive(Parser)]
#[command(
    name = "cronplan",
    version,
    about = "Compose, merge, and apply user crontabs from a plan file"
)]
struct Cli {
    /// Plan file describing the jobs and configuration
    #[arg(long, global = true, default_value = "cronplan.toml")]
    plan: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the plan's jobs to the live table
    Apply,
    /// Print the composed lines without touching the table
    Lines,
    /// Print the live table for the plan's user
    Current,
    /// Write the composed table to a file
    Save(save::SaveArgs),
    /// Install a prepared table file directly
    Install(install::InstallArgs),
    /// Remove the plan's jobs from the live table
    Remove,
    /// Remove the user's entire table
    Wipe,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let plan = Plan::load(&cli.plan)?;
    tracing::debug!(plan = %cli.plan.display(), jobs = plan.jobs.len(), "plan loaded");

    match cli.command {
        Commands::Apply => apply::run(&plan),
        Commands::Lines => lines::run(&plan),
        Commands::Current => current::run(&plan),
        Commands::Save(args) => save::run(&plan, &args),
        Commands::Install(args) => install::run(&plan, &args),
        Commands::Remove => remove::run(&plan),
        Commands::Wipe => wipe::run(&plan),
    }
}

/// `RUST_LOG` controls verbosity; stderr keeps stdout clean for table output
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
