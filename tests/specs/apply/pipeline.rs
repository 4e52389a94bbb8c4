//! Apply pipeline specs
//!
//! Compose, merge with the live table, install through the stub, re-read.
//! The byte content of the installed table file is part of the contract.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn apply_into_empty_table_installs_the_blob() {
    let temp = Project::empty();
    temp.plan(MINIMAL_PLAN);

    temp.cronplan()
        .args(&["apply"])
        .passes()
        .stdout_has("Crontab applied: 1 lines live");

    assert_eq!(temp.table(""), Some("\n0 0 * * * pwd\n\n".to_string()));
}

#[test]
fn reapply_after_plan_growth_appends_the_new_job() {
    let temp = Project::empty();
    temp.plan(MINIMAL_PLAN);
    temp.cronplan().args(&["apply"]).passes();

    temp.plan(
        r#"
crontab_bin = "@BIN@"

[[jobs]]
min = "0"
hour = "0"
command = "pwd"

[[jobs]]
min = "30"
hour = "0"
command = "ls"
"#,
    );

    temp.cronplan()
        .args(&["apply"])
        .passes()
        .stdout_has("2 lines live");

    assert_eq!(
        temp.table(""),
        Some("\n0 0 * * * pwd\n30 0 * * * ls\n\n".to_string())
    );
}

#[test]
fn foreign_entries_survive_in_their_order() {
    let temp = Project::empty();
    temp.plan(MINIMAL_PLAN);
    temp.seed_table("", "0 5 * * * first-foreign\n0 6 * * * second-foreign\n");

    temp.cronplan().args(&["apply"]).passes();

    assert_eq!(
        temp.table(""),
        Some("\n0 5 * * * first-foreign\n0 6 * * * second-foreign\n0 0 * * * pwd\n\n".to_string())
    );
}

#[test]
fn reapplied_line_moves_to_the_end() {
    let temp = Project::empty();
    temp.plan(MINIMAL_PLAN);
    temp.seed_table("", "0 0 * * * pwd\n0 5 * * * foreign-job\n");

    temp.cronplan().args(&["apply"]).passes();

    assert_eq!(
        temp.table(""),
        Some("\n0 5 * * * foreign-job\n0 0 * * * pwd\n\n".to_string())
    );
}

#[test]
fn repeated_applies_leave_the_table_byte_stable() {
    let temp = Project::empty();
    temp.plan(MINIMAL_PLAN);

    temp.cronplan().args(&["apply"]).passes();
    let first = temp.table("");

    for _ in 0..2 {
        temp.cronplan().args(&["apply"]).passes();
    }

    assert_eq!(temp.table(""), first);
}

#[test]
fn head_block_precedes_jobs_and_never_stacks() {
    let temp = Project::empty();
    temp.plan(
        r#"
crontab_bin = "@BIN@"
head_lines = ["SHELL=/bin/sh", "PATH=/usr/bin:/bin"]

[[jobs]]
command = "pwd"
"#,
    );

    for _ in 0..2 {
        temp.cronplan().args(&["apply"]).passes();
    }

    assert_eq!(
        temp.table(""),
        Some("SHELL=/bin/sh\nPATH=/usr/bin:/bin\n\n* * * * * pwd\n\n".to_string())
    );
}

#[test]
fn substring_filter_reclaims_stale_managed_lines() {
    let temp = Project::empty();
    temp.plan(
        r##"
crontab_bin = "@BIN@"
merge_filter = "# managed"

[[jobs]]
min = "0"
hour = "2"
command = "./sync.sh # managed"
"##,
    );
    temp.seed_table(
        "",
        "0 1 * * * ./old-sync.sh # managed\n0 5 * * * foreign-job\n",
    );

    temp.cronplan().args(&["apply"]).passes();

    assert_eq!(
        temp.table(""),
        Some("\n0 5 * * * foreign-job\n0 2 * * * ./sync.sh # managed\n\n".to_string())
    );
}

#[test]
fn current_reflects_what_apply_installed() {
    let temp = Project::empty();
    temp.plan(MINIMAL_PLAN);
    temp.seed_table("", "0 5 * * * foreign-job\n");

    temp.cronplan().args(&["apply"]).passes();

    temp.cronplan()
        .args(&["current"])
        .passes()
        .stdout_is("0 5 * * * foreign-job\n0 0 * * * pwd\n");
}

#[test]
fn user_tables_are_isolated() {
    let temp = Project::empty();
    temp.plan(
        r#"
crontab_bin = "@BIN@"
username = "alice"

[[jobs]]
command = "pwd"
"#,
    );
    temp.cronplan().args(&["apply"]).passes();

    temp.plan(
        r#"
crontab_bin = "@BIN@"
username = "bob"

[[jobs]]
command = "ls"
"#,
    );
    temp.cronplan().args(&["apply"]).passes();

    assert_eq!(temp.table("alice"), Some("\n* * * * * pwd\n\n".to_string()));
    assert_eq!(temp.table("bob"), Some("\n* * * * * ls\n\n".to_string()));
    assert_eq!(temp.table(""), None);
}
