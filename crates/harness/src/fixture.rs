// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture naming for scenarios that create isolated resources

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::charset::{string_with_charset, LOWERCASE};

/// Literal prefix of every fixture name
pub const FIXTURE_PREFIX: &str = "integration-";

/// Number of random characters appended to the prefix
pub const FIXTURE_SUFFIX_LEN: usize = 5;

/// Generates namespace-like fixture identifiers such as `integration-qzkfa`.
///
/// Names are collision resistant across repeated and concurrent runs but
/// are not cryptographically unique. The generator sits behind a mutex so
/// one namer can serve scenarios running in parallel.
pub struct FixtureNamer<R = StdRng> {
    rng: Mutex<R>,
}

impl<R: RngCore> FixtureNamer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Next fixture identifier
    pub fn next_name(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let suffix = string_with_charset(&mut *rng, FIXTURE_SUFFIX_LEN, LOWERCASE);
        format!("{}{}", FIXTURE_PREFIX, suffix)
    }
}

impl FixtureNamer<StdRng> {
    /// Namer seeded once from the current wall-clock time.
    ///
    /// Names differ between runs; use [`FixtureNamer::new`] with a seeded
    /// generator where reproducible names are needed.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        Self::new(StdRng::seed_from_u64(nanos as u64))
    }
}

impl Default for FixtureNamer<StdRng> {
    fn default() -> Self {
        Self::from_time()
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
