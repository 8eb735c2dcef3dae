// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Black-box integration harness for the sonobuoy CLI
//!
//! Locates a built binary, runs it with controlled arguments and
//! environment, and checks what it prints against expected lines.

pub mod charset;
pub mod config;
mod context;
mod error;
pub mod fixture;
pub mod resolve;
pub mod runner;
pub mod suite;
pub mod verify;

pub use config::{Environment, Metadata, Overrides, Settings};
pub use context::{bootstrap, RunContext};
pub use error::{BootstrapError, ConfigError, HarnessError};
pub use fixture::FixtureNamer;
pub use resolve::{resolve_binary, ResolveError};
pub use runner::{Capture, Invocation, InvocationError, ProcessRunner, Termination};
pub use suite::{Scenario, ScenarioFailure, ScenarioOutcome, Suite, SuiteReport};
pub use verify::{verify_lines, LineMismatch};
