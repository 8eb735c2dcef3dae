// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! sonobuoy-e2e - black-box integration suite for the sonobuoy CLI
//!
//! Validates build metadata, then runs every registered scenario against
//! the built binary and exits non-zero if any of them failed.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod scenarios;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use sonobuoy_harness::{bootstrap, Environment, Overrides, Settings};

#[derive(Parser)]
#[command(
    name = "sonobuoy-e2e",
    version,
    about = "Run end-to-end checks against a built sonobuoy binary"
)]
struct Cli {
    /// SHA of HEAD Git commit (git rev-parse --verify HEAD) [env: GIT_SHA]
    #[arg(long, value_name = "SHA")]
    git_sha: Option<String>,

    /// Git version used for Sonobuoy (git describe --always --dirty --tags) [env: GIT_VERSION]
    #[arg(long, value_name = "VERSION")]
    git_version: Option<String>,

    /// Bound on each invocation of the binary, e.g. 90s [env: SONOBUOY_E2E_TIMEOUT] [default: 60s]
    #[arg(long, value_name = "DURATION")]
    timeout: Option<String>,

    /// Print scenario names and exit
    #[arg(long)]
    list: bool,

    /// Only run scenarios whose name contains this string
    filter: Option<String>,
}

/// Filter directives for the stderr log
const LOG_ENV: &str = "SONOBUOY_E2E_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    let suite = scenarios::suite();
    if cli.list {
        for name in suite.names() {
            println!("{}", name);
        }
        return ExitCode::SUCCESS;
    }

    let overrides = Overrides {
        git_sha: cli.git_sha,
        git_version: cli.git_version,
        timeout: cli.timeout,
    };
    let settings = Settings::resolve(&overrides, &Environment::capture());

    let ctx = match bootstrap(&settings) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!(error = %e, "bootstrap failed");
            for report in e.reports() {
                eprint!("{}", report);
            }
            return ExitCode::FAILURE;
        }
    };

    let report = suite.run(Arc::new(ctx), cli.filter.as_deref()).await;
    print!("{}", report.render());
    ExitCode::from(report.exit_code())
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
