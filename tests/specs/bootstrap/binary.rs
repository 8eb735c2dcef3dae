//! Binary resolution specs
//!
//! Verify the suite finds the CLI or aborts before running anything.

use crate::prelude::*;

#[test]
fn missing_binary_aborts_before_any_scenario() {
    let sandbox = Sandbox::empty();

    sandbox
        .e2e()
        .metadata()
        .exits(1)
        .stderr_has("failed to find sonobuoy CLI")
        .stderr_has("../../sonobuoy")
        .stdout_lacks("running");
}

#[test]
fn missing_override_aborts() {
    let sandbox = Sandbox::empty();
    let absent = sandbox.path().join("not-built");

    sandbox
        .e2e()
        .metadata()
        .binary(&absent)
        .exits(1)
        .stderr_has("not-built")
        .stderr_has("SONOBUOY_CLI")
        .stdout_lacks("scenario");
}

#[test]
fn default_location_is_used_without_override() {
    let sandbox = Sandbox::empty();
    sandbox.install_default(&GOOD_VERSION_OUTPUT);

    sandbox
        .e2e()
        .metadata()
        .passes()
        .stdout_has("scenario version ... ok");
}

#[test]
fn override_takes_precedence_over_default_location() {
    let sandbox = Sandbox::empty();
    sandbox.install_default(&["Sonobuoy Version: stale"]);
    let fresh = sandbox.fake_sonobuoy("fresh-sonobuoy", &GOOD_VERSION_OUTPUT);

    sandbox
        .e2e()
        .metadata()
        .binary(&fresh)
        .passes()
        .stdout_has("1 passed; 0 failed");
}
