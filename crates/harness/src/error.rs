// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Suite-level errors and their user-facing rendering
//!
//! [`HarnessError`] carries:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use std::fmt;

use thiserror::Error;

use crate::config::{ENV_BINARY, ENV_GIT_SHA, ENV_GIT_VERSION, ENV_TIMEOUT};
use crate::resolve::{ResolveError, DEFAULT_BINARY_PATH};

/// Configuration errors detected before any scenario runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Git SHA must be provided, using --git-sha or setting environment variable GIT_SHA")]
    MissingGitSha,
    #[error("Sonobuoy version from git must be provided, using --git-version or setting environment variable GIT_VERSION")]
    MissingGitVersion,
    #[error("invalid timeout {value:?}: {message}")]
    InvalidTimeout { value: String, message: String },
}

/// Fatal errors that stop the suite before any scenario runs
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to find sonobuoy CLI: {0}")]
    BinaryNotFound(#[from] ResolveError),
    /// One entry per problem found; all are reported together
    #[error("{}", join_lines(.0))]
    Config(Vec<ConfigError>),
}

fn join_lines(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl BootstrapError {
    /// One user-facing report per underlying problem
    pub fn reports(&self) -> Vec<HarnessError> {
        match self {
            BootstrapError::BinaryNotFound(ResolveError::NotFound(path)) => {
                vec![HarnessError::new(self.to_string())
                    .with_context(format!("Nothing exists at {}", path.display()))
                    .with_suggestion(format!(
                        "Build the CLI so it is available at {}",
                        DEFAULT_BINARY_PATH
                    ))
                    .with_suggestion(format!(
                        "Or point {} at an existing binary",
                        ENV_BINARY
                    ))]
            }
            BootstrapError::Config(errors) => errors.iter().map(HarnessError::from).collect(),
        }
    }
}

impl From<&ConfigError> for HarnessError {
    fn from(err: &ConfigError) -> Self {
        let report = HarnessError::new(err.to_string());
        match err {
            ConfigError::MissingGitSha => report
                .with_suggestion("Pass --git-sha \"$(git rev-parse --verify HEAD)\"")
                .with_suggestion(format!("Or export {}", ENV_GIT_SHA)),
            ConfigError::MissingGitVersion => report
                .with_suggestion("Pass --git-version \"$(git describe --always --dirty --tags)\"")
                .with_suggestion(format!("Or export {}", ENV_GIT_VERSION)),
            ConfigError::InvalidTimeout { .. } => report
                .with_context("Durations use humantime syntax, e.g. 90s or 2m")
                .with_suggestion(format!("Fix --timeout or {}", ENV_TIMEOUT)),
        }
    }
}

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct HarnessError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl HarnessError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for HarnessError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
