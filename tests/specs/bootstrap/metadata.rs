//! Build metadata specs
//!
//! Verify commit and version metadata are required before scenarios run,
//! and that flags override the environment.

use crate::prelude::*;

#[test]
fn missing_commit_aborts() {
    let sandbox = Sandbox::empty();
    sandbox.install_default(&GOOD_VERSION_OUTPUT);

    sandbox
        .e2e()
        .env("GIT_VERSION", "v0.15.0")
        .exits(1)
        .stderr_has("Git SHA must be provided")
        .stderr_has("--git-sha")
        .stderr_has("GIT_SHA")
        .stdout_lacks("running");
}

#[test]
fn missing_version_aborts() {
    let sandbox = Sandbox::empty();
    sandbox.install_default(&GOOD_VERSION_OUTPUT);

    sandbox
        .e2e()
        .env("GIT_SHA", "abc123")
        .exits(1)
        .stderr_has("Sonobuoy version from git must be provided")
        .stderr_has("--git-version")
        .stdout_lacks("running");
}

#[test]
fn empty_metadata_counts_as_missing() {
    let sandbox = Sandbox::empty();
    sandbox.install_default(&GOOD_VERSION_OUTPUT);

    sandbox
        .e2e()
        .env("GIT_SHA", "")
        .env("GIT_VERSION", "v0.15.0")
        .exits(1)
        .stderr_has("Git SHA must be provided");
}

#[test]
fn every_missing_field_is_reported() {
    let sandbox = Sandbox::empty();
    sandbox.install_default(&GOOD_VERSION_OUTPUT);

    let run = sandbox.e2e().exits(1);
    let stderr = run.stderr();
    assert!(stderr.contains("Git SHA must be provided"));
    assert!(stderr.contains("Sonobuoy version from git must be provided"));
}

#[test]
fn flags_supply_metadata() {
    let sandbox = Sandbox::empty();
    sandbox.install_default(&GOOD_VERSION_OUTPUT);

    sandbox
        .e2e()
        .args(&["--git-sha", "abc123", "--git-version", "v0.15.0"])
        .passes()
        .stdout_has("scenario version ... ok");
}

#[test]
fn flags_override_environment() {
    let sandbox = Sandbox::empty();
    sandbox.install_default(&GOOD_VERSION_OUTPUT);

    sandbox
        .e2e()
        .env("GIT_SHA", "0000000")
        .env("GIT_VERSION", "v0.0.0")
        .args(&["--git-sha", "abc123", "--git-version", "v0.15.0"])
        .passes();
}

#[test]
fn invalid_timeout_aborts() {
    let sandbox = Sandbox::empty();
    sandbox.install_default(&GOOD_VERSION_OUTPUT);

    sandbox
        .e2e()
        .metadata()
        .args(&["--timeout", "eventually"])
        .exits(1)
        .stderr_has("invalid timeout")
        .stdout_lacks("running");
}
