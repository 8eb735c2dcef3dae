// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registered end-to-end scenarios

mod version;

use sonobuoy_harness::Suite;

use self::version::VersionScenario;

/// Every scenario the suite runs
pub fn suite() -> Suite {
    Suite::new().register(VersionScenario)
}
