//! Direct install specs
//!
//! `install` puts a prepared table file live as-is: no compose, no merge.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn install_bypasses_the_merge() {
    let temp = Project::empty();
    temp.plan(MINIMAL_PLAN);
    temp.seed_table("", "0 5 * * * foreign-job\n");
    temp.file("prepared.cron", "0 2 * * * task-one\n0 3 * * * task-two\n");

    temp.cronplan()
        .args(&["install", "prepared.cron"])
        .passes()
        .stdout_has("Crontab installed: 2 lines live");

    // The foreign line is gone: the file replaced the table wholesale
    assert_eq!(
        temp.table(""),
        Some("0 2 * * * task-one\n0 3 * * * task-two\n".to_string())
    );
}

#[test]
fn install_missing_file_runs_nothing() {
    let temp = Project::empty();
    temp.plan(MINIMAL_PLAN);

    temp.cronplan()
        .args(&["install", "absent.cron"])
        .fails()
        .stderr_has("file not found");

    assert!(temp.calls().is_empty());
}

#[test]
fn current_prints_the_live_table() {
    let temp = Project::empty();
    temp.plan(MINIMAL_PLAN);
    temp.seed_table("", "0 5 * * * foreign-job\n\n0 6 * * * other-job\n");

    temp.cronplan()
        .args(&["current"])
        .passes()
        .stdout_is("0 5 * * * foreign-job\n0 6 * * * other-job\n");
}

#[test]
fn current_with_no_table_prints_nothing() {
    let temp = Project::empty();
    temp.plan(MINIMAL_PLAN);

    temp.cronplan().args(&["current"]).passes().stdout_is("");
}

#[test]
fn overridden_templates_never_pass_the_user() {
    // Busybox-style crontab takes no -u flag; the plan overrides the
    // template vectors and the configured username stays local
    let temp = Project::empty();
    temp.plan(
        r#"
crontab_bin = "@BIN@"
username = "bob"
list = ["{crontab}", "-l"]
install = ["{crontab}", "{file}"]
remove_all = ["{crontab}", "-r"]

[[jobs]]
command = "pwd"
"#,
    );

    temp.cronplan().args(&["apply"]).passes();

    assert_eq!(temp.table(""), Some("\n* * * * * pwd\n\n".to_string()));
    assert_eq!(temp.table("bob"), None);
    assert!(temp.calls().iter().all(|call| !call.contains("-u")));
}
