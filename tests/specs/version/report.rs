//! Version scenario specs
//!
//! Verify the version scenario passes for a matching binary and reports
//! every mismatched line otherwise.

use crate::prelude::*;

#[test]
fn matching_binary_passes() {
    let sandbox = Sandbox::empty();
    sandbox.install_default(&GOOD_VERSION_OUTPUT);

    sandbox
        .e2e()
        .metadata()
        .passes()
        .stdout_has("running 1 scenario(s)")
        .stdout_has("scenario version ... ok")
        .stdout_has("scenario result: ok. 1 passed; 0 failed");
}

#[test]
fn trailing_lines_are_ignored() {
    let sandbox = Sandbox::empty();
    let mut lines = GOOD_VERSION_OUTPUT.to_vec();
    lines.push("Platform: linux/amd64");
    sandbox.install_default(&lines);

    sandbox.e2e().metadata().passes();
}

#[test]
fn wrong_version_reports_exactly_one_mismatch() {
    let sandbox = Sandbox::empty();
    let mut lines = GOOD_VERSION_OUTPUT.to_vec();
    lines[0] = "Sonobuoy Version: v0.14.0";
    sandbox.install_default(&lines);

    let run = sandbox.e2e().metadata().exits(1);
    let stdout = run.stdout();
    let failure = stdout
        .split("---- version ----\n")
        .nth(1)
        .and_then(|rest| rest.split("\n\n").next())
        .expect("failure section");

    similar_asserts::assert_eq!(
        failure,
        "unexpected output, 1 mismatched line(s)\n  \
         line 0: expected \"Sonobuoy Version: v0.15.0\", got \"Sonobuoy Version: v0.14.0\""
    );
}

#[test]
fn every_mismatched_line_is_reported() {
    let sandbox = Sandbox::empty();
    sandbox.install_default(&[
        "Sonobuoy Version: dirty",
        "MinimumKubeVersion: 1.13.0",
        "MaximumKubeVersion: 1.16.0",
        "GitSHA: deadbeef",
    ]);

    sandbox
        .e2e()
        .metadata()
        .exits(1)
        .stdout_has("3 mismatched line(s)")
        .stdout_has("line 0:")
        .stdout_has("line 2:")
        .stdout_has("line 3:")
        .stdout_lacks("line 1:");
}

#[test]
fn short_output_reports_missing_lines() {
    let sandbox = Sandbox::empty();
    sandbox.install_default(&GOOD_VERSION_OUTPUT[..2]);

    sandbox
        .e2e()
        .metadata()
        .exits(1)
        .stdout_has("line 3: expected \"GitSHA: abc123\", got end of output");
}

#[test]
fn filter_can_exclude_every_scenario() {
    let sandbox = Sandbox::empty();
    sandbox.install_default(&["nothing useful"]);

    sandbox
        .e2e()
        .metadata()
        .args(&["no-such-scenario"])
        .passes()
        .stdout_has("running 0 scenario(s)");
}
