// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Version reporting ties the binary to the commit it was built from

use async_trait::async_trait;
use sonobuoy_harness::{verify_lines, Metadata, RunContext, Scenario, ScenarioFailure};

/// Oldest Kubernetes release the CLI supports
pub const MINIMUM_KUBE_VERSION: &str = "1.13.0";
/// Newest Kubernetes release the CLI supports
pub const MAXIMUM_KUBE_VERSION: &str = "1.15.99";

/// Runs `sonobuoy version2 --kubeconfig <KUBECONFIG>` and checks the
/// reported version, supported platform range and commit.
pub struct VersionScenario;

/// Lines `version2` must print first, in order
pub fn expected_lines(metadata: &Metadata) -> Vec<String> {
    vec![
        format!("Sonobuoy Version: {}", metadata.git_version),
        format!("MinimumKubeVersion: {}", MINIMUM_KUBE_VERSION),
        format!("MaximumKubeVersion: {}", MAXIMUM_KUBE_VERSION),
        format!("GitSHA: {}", metadata.git_sha),
    ]
}

#[async_trait]
impl Scenario for VersionScenario {
    fn name(&self) -> &str {
        "version"
    }

    async fn run(&self, ctx: &RunContext) -> Result<(), ScenarioFailure> {
        let invocation = ctx
            .invocation()
            .args(["version2", "--kubeconfig", ctx.kubeconfig()]);
        let capture = ctx.runner().run_success(&invocation).await?;

        let mismatches = verify_lines(&capture.stdout_str(), &expected_lines(ctx.metadata()));
        if mismatches.is_empty() {
            Ok(())
        } else {
            Err(ScenarioFailure::Mismatch(mismatches))
        }
    }
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
