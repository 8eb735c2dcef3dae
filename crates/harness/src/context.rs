// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run context and the one-time bootstrap that builds it

use std::path::{Path, PathBuf};

use crate::config::{Metadata, Settings};
use crate::error::BootstrapError;
use crate::fixture::FixtureNamer;
use crate::resolve::resolve_binary;
use crate::runner::{Invocation, ProcessRunner};

/// State shared by every scenario in a run.
///
/// Built once by [`bootstrap`] and read-only afterwards.
pub struct RunContext {
    binary: PathBuf,
    metadata: Metadata,
    kubeconfig: String,
    runner: ProcessRunner,
    namer: FixtureNamer,
}

impl RunContext {
    pub fn new(
        binary: PathBuf,
        metadata: Metadata,
        kubeconfig: impl Into<String>,
        runner: ProcessRunner,
        namer: FixtureNamer,
    ) -> Self {
        Self {
            binary,
            metadata,
            kubeconfig: kubeconfig.into(),
            runner,
            namer,
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Value passed through to the binary's `--kubeconfig` flag
    pub fn kubeconfig(&self) -> &str {
        &self.kubeconfig
    }

    pub fn runner(&self) -> &ProcessRunner {
        &self.runner
    }

    /// Invocation of the binary under test, without arguments
    pub fn invocation(&self) -> Invocation {
        Invocation::new(&self.binary)
    }

    /// Fresh identifier for resources a scenario creates
    pub fn fixture_name(&self) -> String {
        self.namer.next_name()
    }
}

/// Validate settings and build the run context.
///
/// Steps run in order and the first failing step aborts: the binary must
/// exist, then both metadata strings must be present (every missing one is
/// reported), then the timeout must parse.
pub fn bootstrap(settings: &Settings) -> Result<RunContext, BootstrapError> {
    let binary = resolve_binary(settings.binary_override.as_deref())?;
    let metadata = settings.metadata().map_err(BootstrapError::Config)?;
    let timeout = settings
        .timeout()
        .map_err(|e| BootstrapError::Config(vec![e]))?;

    tracing::info!(
        binary = %binary.display(),
        git_sha = %metadata.git_sha,
        git_version = %metadata.git_version,
        timeout_ms = timeout.as_millis() as u64,
        "bootstrap complete"
    );

    Ok(RunContext::new(
        binary,
        metadata,
        settings.kubeconfig.clone(),
        ProcessRunner::new(timeout),
        FixtureNamer::from_time(),
    ))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
