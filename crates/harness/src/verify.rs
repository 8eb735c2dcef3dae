// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented output verification

use std::fmt;

/// A position where actual output differs from what was expected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMismatch {
    pub index: usize,
    pub expected: String,
    /// `None` when the output ended before this line
    pub actual: Option<String>,
}

impl fmt::Display for LineMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.actual {
            Some(actual) => write!(
                f,
                "line {}: expected {:?}, got {:?}",
                self.index, self.expected, actual
            ),
            None => write!(
                f,
                "line {}: expected {:?}, got end of output",
                self.index, self.expected
            ),
        }
    }
}

/// Compare `output` against `expected`, line by line.
///
/// Output is split on `\n` and compared byte for byte. Lines past the end
/// of `expected` are ignored, so a binary may print trailing lines beyond
/// the expected prefix. Expected lines past the end of the output are
/// reported as missing. Every mismatch is returned, in line order.
pub fn verify_lines<S: AsRef<str>>(output: &str, expected: &[S]) -> Vec<LineMismatch> {
    let mut actual = output.split('\n');
    expected
        .iter()
        .enumerate()
        .filter_map(|(index, want)| {
            let want = want.as_ref();
            match actual.next() {
                Some(got) if got == want => None,
                got => Some(LineMismatch {
                    index,
                    expected: want.to_string(),
                    actual: got.map(str::to_string),
                }),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod tests;
