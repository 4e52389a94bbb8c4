//! Apply failure specs
//!
//! Every failure must leave the stub's table untouched and surface the
//! library's error text on stderr with a non-zero exit.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn rejected_install_preserves_the_previous_table() {
    let temp = Project::empty();
    temp.plan(MINIMAL_PLAN);
    temp.seed_table("", "0 5 * * * foreign-job\n");
    temp.fail_installs();

    temp.cronplan()
        .args(&["apply"])
        .fails()
        .stderr_has("Failure to setup crontab from file")
        .stderr_has("installation rejected");

    assert_eq!(temp.table(""), Some("0 5 * * * foreign-job\n".to_string()));
}

#[test]
fn missing_crontab_binary_is_a_read_failure() {
    let temp = Project::empty();
    temp.plan(
        r#"
crontab_bin = "/nonexistent/crontab"

[[jobs]]
command = "pwd"
"#,
    );

    temp.cronplan()
        .args(&["apply"])
        .fails()
        .stderr_has("failed to read crontab");
}

#[test]
fn misconfigured_sentinel_propagates_the_listing_error() {
    let temp = Project::empty();
    temp.plan(
        r#"
crontab_bin = "@BIN@"
not_found_phrase = "keine crontab"

[[jobs]]
command = "pwd"
"#,
    );

    temp.cronplan()
        .args(&["apply"])
        .fails()
        .stderr_has("failed to read crontab")
        .stderr_has("no crontab for you");

    assert_eq!(temp.table(""), None);
}

#[test]
fn template_placeholder_typo_is_reported() {
    let temp = Project::empty();
    temp.plan(
        r#"
crontab_bin = "@BIN@"
install = ["{crontab}", "{user}", "{fiel}"]

[[jobs]]
command = "pwd"
"#,
    );

    temp.cronplan()
        .args(&["apply"])
        .fails()
        .stderr_has("unresolved placeholder")
        .stderr_has("fiel");
}

#[test]
fn invalid_spec_fails_before_any_invocation() {
    let temp = Project::empty();
    temp.plan(
        r#"
crontab_bin = "@BIN@"

[[jobs]]
min = "0"
"#,
    );

    temp.cronplan()
        .args(&["apply"])
        .fails()
        .stderr_has("invalid job spec");

    assert!(temp.calls().is_empty(), "compose failures precede any run");
}

#[test]
fn unknown_plan_key_fails_before_any_invocation() {
    let temp = Project::empty();
    temp.plan("crontab_bni = \"@BIN@\"\n");

    temp.cronplan()
        .args(&["apply"])
        .fails()
        .stderr_has("unknown field");

    assert!(temp.calls().is_empty());
}
