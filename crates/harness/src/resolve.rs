// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locating the CLI binary under test

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Where the binary is expected when no override is given, relative to
/// the working directory the suite is launched from.
pub const DEFAULT_BINARY_PATH: &str = "../../sonobuoy";

/// Binary resolution errors
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("binary not found at {}", .0.display())]
    NotFound(PathBuf),
}

/// Resolve the binary path from an optional override.
///
/// An empty override is treated as unset. The returned path is checked for
/// existence once, here; later callers do not re-check it.
pub fn resolve_binary(override_path: Option<&str>) -> Result<PathBuf, ResolveError> {
    resolve_binary_or(override_path, Path::new(DEFAULT_BINARY_PATH))
}

/// Like [`resolve_binary`] with an explicit fallback path
pub fn resolve_binary_or(
    override_path: Option<&str>,
    fallback: &Path,
) -> Result<PathBuf, ResolveError> {
    let path = match override_path.filter(|p| !p.is_empty()) {
        Some(p) => PathBuf::from(p),
        None => fallback.to_path_buf(),
    };
    check_exists(&path)?;
    tracing::info!(path = %path.display(), "resolved binary");
    Ok(path)
}

fn check_exists(path: &Path) -> Result<(), ResolveError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ResolveError::NotFound(path.to_path_buf()))
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
