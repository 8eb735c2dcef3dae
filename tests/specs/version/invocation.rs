//! Version scenario invocation specs
//!
//! Verify how the binary is invoked and how failed invocations surface.

use crate::prelude::*;

#[test]
fn nonzero_exit_fails_with_stderr() {
    let sandbox = Sandbox::empty();
    sandbox.script("sonobuoy", "echo 'unable to load kubeconfig' >&2\nexit 3");

    sandbox
        .e2e()
        .metadata()
        .exits(1)
        .stdout_has("scenario version ... FAILED")
        .stdout_has("unexpected error running command")
        .stdout_has("exit code 3")
        .stdout_has("unable to load kubeconfig");
}

#[test]
fn kubeconfig_is_passed_through() {
    let sandbox = Sandbox::empty();
    let kubeconfig = sandbox.path().join("kubeconfig.yaml");
    sandbox.script(
        "sonobuoy",
        &format!(
            "[ \"$3\" = '{}' ] || {{ echo \"kubeconfig was '$3'\" >&2; exit 2; }}\nprintf '%s\\n' {}",
            kubeconfig.display(),
            GOOD_VERSION_OUTPUT
                .iter()
                .map(|l| format!("'{}'", l))
                .collect::<Vec<_>>()
                .join(" ")
        ),
    );

    sandbox
        .e2e()
        .metadata()
        .env("KUBECONFIG", &kubeconfig)
        .passes();
}

#[test]
fn unset_kubeconfig_passes_empty_value() {
    let sandbox = Sandbox::empty();
    sandbox.script(
        "sonobuoy",
        "[ \"$#\" -eq 3 ] && [ -z \"$3\" ] || exit 2\n\
         printf '%s\\n' 'Sonobuoy Version: v0.15.0' 'MinimumKubeVersion: 1.13.0' \
         'MaximumKubeVersion: 1.15.99' 'GitSHA: abc123'",
    );

    sandbox.e2e().metadata().passes();
}

#[test]
fn hung_binary_is_killed_after_timeout() {
    let sandbox = Sandbox::empty();
    sandbox.script("sonobuoy", "exec sleep 30");

    sandbox
        .e2e()
        .metadata()
        .args(&["--timeout", "300ms"])
        .exits(1)
        .stdout_has("did not exit within 300ms");
}

#[test]
fn timeout_can_come_from_environment() {
    let sandbox = Sandbox::empty();
    sandbox.script("sonobuoy", "exec sleep 30");

    sandbox
        .e2e()
        .metadata()
        .env("SONOBUOY_E2E_TIMEOUT", "200ms")
        .exits(1)
        .stdout_has("did not exit within 200ms");
}
