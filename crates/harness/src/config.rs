// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration resolution
//!
//! Every setting comes from one of three places, in order of precedence:
//! a command-line flag ([`Overrides`]), an environment variable
//! ([`Environment`]), or a built-in default. The process environment is
//! read exactly once, by [`Environment::capture`].

use std::collections::HashMap;
use std::time::Duration;

use crate::error::ConfigError;

/// Path to the binary under test
pub const ENV_BINARY: &str = "SONOBUOY_CLI";
/// Default for `--git-sha`
pub const ENV_GIT_SHA: &str = "GIT_SHA";
/// Default for `--git-version`
pub const ENV_GIT_VERSION: &str = "GIT_VERSION";
/// Passed through to the binary as `--kubeconfig`
pub const ENV_KUBECONFIG: &str = "KUBECONFIG";
/// Default for `--timeout`
pub const ENV_TIMEOUT: &str = "SONOBUOY_E2E_TIMEOUT";

/// Bound on a single invocation when nothing else is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const CONSUMED: [&str; 5] = [
    ENV_BINARY,
    ENV_GIT_SHA,
    ENV_GIT_VERSION,
    ENV_KUBECONFIG,
    ENV_TIMEOUT,
];

/// Snapshot of the environment variables the harness consumes
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Capture the consumed variables from the current process
    pub fn capture() -> Self {
        let vars = CONSUMED
            .iter()
            .filter_map(|name| std::env::var(name).ok().map(|v| (name.to_string(), v)))
            .collect();
        Self { vars }
    }

    /// Set a variable (builder style)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Non-empty value of a variable
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub git_sha: Option<String>,
    pub git_version: Option<String>,
    pub timeout: Option<String>,
}

/// Build metadata the binary is expected to report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Commit the binary was built from (`git rev-parse --verify HEAD`)
    pub git_sha: String,
    /// Descriptive version (`git describe --always --dirty --tags`)
    pub git_version: String,
}

/// Merged configuration, not yet validated
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub binary_override: Option<String>,
    pub git_sha: Option<String>,
    pub git_version: Option<String>,
    pub timeout: Option<String>,
    /// Empty when `KUBECONFIG` is unset
    pub kubeconfig: String,
}

impl Settings {
    /// Merge flags over environment
    pub fn resolve(overrides: &Overrides, env: &Environment) -> Self {
        Self {
            binary_override: env.get(ENV_BINARY).map(str::to_string),
            git_sha: pick(overrides.git_sha.as_deref(), env.get(ENV_GIT_SHA)),
            git_version: pick(overrides.git_version.as_deref(), env.get(ENV_GIT_VERSION)),
            timeout: pick(overrides.timeout.as_deref(), env.get(ENV_TIMEOUT)),
            kubeconfig: env.get(ENV_KUBECONFIG).unwrap_or_default().to_string(),
        }
    }

    /// Both metadata strings, or one error per missing field
    pub fn metadata(&self) -> Result<Metadata, Vec<ConfigError>> {
        let mut missing = Vec::new();
        if self.git_sha.is_none() {
            missing.push(ConfigError::MissingGitSha);
        }
        if self.git_version.is_none() {
            missing.push(ConfigError::MissingGitVersion);
        }
        match (&self.git_sha, &self.git_version) {
            (Some(git_sha), Some(git_version)) => Ok(Metadata {
                git_sha: git_sha.clone(),
                git_version: git_version.clone(),
            }),
            _ => Err(missing),
        }
    }

    /// Invocation timeout, falling back to [`DEFAULT_TIMEOUT`]
    pub fn timeout(&self) -> Result<Duration, ConfigError> {
        match &self.timeout {
            None => Ok(DEFAULT_TIMEOUT),
            Some(raw) => match humantime::parse_duration(raw) {
                Ok(d) if !d.is_zero() => Ok(d),
                Ok(_) => Err(ConfigError::InvalidTimeout {
                    value: raw.clone(),
                    message: "must be greater than zero".to_string(),
                }),
                Err(e) => Err(ConfigError::InvalidTimeout {
                    value: raw.clone(),
                    message: e.to_string(),
                }),
            },
        }
    }
}

/// First non-empty value, flag before environment
fn pick(flag: Option<&str>, env: Option<&str>) -> Option<String> {
    flag.filter(|v| !v.is_empty())
        .or(env)
        .map(str::to_string)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
