//! cronplan-core: Core library for the cronplan CLI tool
//!
//! This crate provides:
//! - Job specifications and scheduler-table line composition
//! - Snapshot reading, merging, and serialization of a user's crontab
//! - Typed argv templates for the external crontab binary
//! - The `CronTab` applier orchestrating compose/read/merge/write/install

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod command;
pub mod error;
pub mod filter;
pub mod job;
pub mod runner;

// Pipeline pieces (order matters for dependencies)
pub mod table;
pub mod writer;
pub mod crontab;

// Re-exports
pub use command::CommandTemplates;
pub use crontab::{CronTab, CronTabConfig};
pub use error::CronTabError;
pub use filter::MergeFilter;
pub use job::JobSpec;
pub use runner::{ProcessRunner, RunError, RunOutput};
pub use table::TableSnapshot;
