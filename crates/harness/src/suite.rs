// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario registry and concurrent execution
//!
//! Scenarios run concurrently, one tokio task each. A failing scenario is
//! recorded and reported; it never stops the others.

use std::fmt::Write as _;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use thiserror::Error;

use crate::context::RunContext;
use crate::runner::InvocationError;
use crate::verify::LineMismatch;

/// One end-to-end check against the binary under test
#[async_trait]
pub trait Scenario: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self, ctx: &RunContext) -> Result<(), ScenarioFailure>;
}

/// Why a scenario failed
#[derive(Debug, Error)]
pub enum ScenarioFailure {
    #[error("unexpected error running command: {0}")]
    Invocation(#[from] InvocationError),
    #[error("unexpected output, {} mismatched line(s)", .0.len())]
    Mismatch(Vec<LineMismatch>),
    #[error("scenario panicked: {0}")]
    Panicked(String),
}

impl ScenarioFailure {
    /// Diagnostic lines shown under the failure message
    pub fn details(&self) -> Vec<String> {
        match self {
            ScenarioFailure::Invocation(err) => match err.capture() {
                Some(capture) => {
                    let mut lines = vec![format!("{}", capture.termination())];
                    let stderr = capture.stderr_str();
                    if !stderr.trim().is_empty() {
                        lines.push("stderr:".to_string());
                        lines.extend(stderr.lines().map(|l| format!("  {}", l)));
                    }
                    lines
                }
                None => Vec::new(),
            },
            ScenarioFailure::Mismatch(mismatches) => {
                mismatches.iter().map(ToString::to_string).collect()
            }
            ScenarioFailure::Panicked(_) => Vec::new(),
        }
    }
}

/// Result of one scenario
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<(), ScenarioFailure>,
    pub elapsed: Duration,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a run, in registration order
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub outcomes: Vec<ScenarioOutcome>,
    pub elapsed: Duration,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// True when no scenario failed, including when none ran
    pub fn success(&self) -> bool {
        self.failed() == 0
    }

    /// Process exit status for this report
    pub fn exit_code(&self) -> u8 {
        if self.success() {
            0
        } else {
            1
        }
    }

    /// Human-readable report in the style of the libtest runner
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "running {} scenario(s)", self.outcomes.len());
        for outcome in &self.outcomes {
            let status = if outcome.passed() { "ok" } else { "FAILED" };
            let _ = writeln!(out, "scenario {} ... {}", outcome.name, status);
        }

        let failures: Vec<_> = self
            .outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.name, e)))
            .collect();
        if !failures.is_empty() {
            let _ = writeln!(out, "\nfailures:");
            for (name, failure) in failures {
                let _ = writeln!(out, "\n---- {} ----", name);
                let _ = writeln!(out, "{}", failure);
                for line in failure.details() {
                    let _ = writeln!(out, "  {}", line);
                }
            }
        }

        let _ = writeln!(
            out,
            "\nscenario result: {}. {} passed; {} failed; finished in {:.2}s",
            if self.success() { "ok" } else { "FAILED" },
            self.passed(),
            self.failed(),
            self.elapsed.as_secs_f64()
        );
        out
    }
}

/// Registered scenarios
#[derive(Default)]
pub struct Suite {
    scenarios: Vec<Arc<dyn Scenario>>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, scenario: impl Scenario + 'static) -> Self {
        self.scenarios.push(Arc::new(scenario));
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.name()).collect()
    }

    /// Run every scenario whose name contains `filter` (all when `None`)
    pub async fn run(&self, ctx: Arc<RunContext>, filter: Option<&str>) -> SuiteReport {
        let start = Instant::now();
        let selected: Vec<Arc<dyn Scenario>> = self
            .scenarios
            .iter()
            .filter(|s| filter.map_or(true, |f| s.name().contains(f)))
            .cloned()
            .collect();
        tracing::info!(selected = selected.len(), total = self.scenarios.len(), "running suite");

        let handles: Vec<_> = selected
            .into_iter()
            .map(|scenario| {
                let ctx = Arc::clone(&ctx);
                let name = scenario.name().to_string();
                let handle = tokio::spawn(async move {
                    let started = Instant::now();
                    tracing::info!(scenario = scenario.name(), "scenario started");
                    let result = scenario.run(&ctx).await;
                    (result, started.elapsed())
                });
                (name, handle)
            })
            .collect();

        let mut outcomes = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            let (result, elapsed) = match handle.await {
                Ok(finished) => finished,
                Err(e) => (
                    Err(ScenarioFailure::Panicked(e.to_string())),
                    Duration::ZERO,
                ),
            };
            match &result {
                Ok(()) => tracing::info!(scenario = %name, "scenario passed"),
                Err(e) => tracing::warn!(scenario = %name, error = %e, "scenario failed"),
            }
            outcomes.push(ScenarioOutcome {
                name,
                result,
                elapsed,
            });
        }

        SuiteReport {
            outcomes,
            elapsed: start.elapsed(),
        }
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
