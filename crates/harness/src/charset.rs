// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Random strings drawn from a fixed alphabet

use rand::Rng;

/// Lowercase ASCII letters, the alphabet used for fixture names
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Build a string of exactly `length` characters, each drawn uniformly
/// and independently from `charset`.
///
/// An empty `charset` yields an empty string regardless of `length`.
pub fn string_with_charset<R: Rng>(rng: &mut R, length: usize, charset: &str) -> String {
    let alphabet: Vec<char> = charset.chars().collect();
    if alphabet.is_empty() {
        return String::new();
    }
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

#[cfg(test)]
#[path = "charset_tests.rs"]
mod tests;
