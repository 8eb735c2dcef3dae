//! CLI surface specs
//!
//! Verify help output and scenario listing.

use crate::prelude::*;

#[test]
fn help_lists_metadata_flags() {
    let sandbox = Sandbox::empty();

    sandbox
        .e2e()
        .args(&["--help"])
        .passes()
        .stdout_has("--git-sha")
        .stdout_has("--git-version")
        .stdout_has("--timeout");
}

#[test]
fn list_prints_scenarios_without_bootstrap() {
    let sandbox = Sandbox::empty();

    // No binary and no metadata: listing must still succeed.
    let run = sandbox.e2e().args(&["--list"]).passes();
    similar_asserts::assert_eq!(run.stdout(), "version\n");
}

#[test]
fn unknown_flag_is_rejected() {
    let sandbox = Sandbox::empty();

    sandbox
        .e2e()
        .args(&["--no-such-flag"])
        .fails()
        .stderr_has("--no-such-flag");
}
