// Copyright (c) 2025 Alphabet Table Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Positional hash for the Alphabet Table.
//!
//! The hash only looks at the first two characters of the uppercased key:
//!
//! ```text
//! hash = index(first) * len(alphabet(first)) + index(second)
//! ```
//!
//! The base comes from the first character's alphabet alone, so a Latin
//! first letter followed by a Cyrillic second letter is hashed in base 26.

use crate::data_structures::alphabet_table::alphabet::classify;
use crate::data_structures::alphabet_table::error::{AlphabetTableError, Result};

/// Computes the positional hash of a key.
///
/// # Arguments
///
/// * `key` - The key to hash. Case is ignored.
///
/// # Returns
///
/// The hash value, `InvalidKeyLength` for keys under two characters, or
/// `UnsupportedCharacter` when either leading character is outside both
/// alphabets.
pub fn hash_code(key: &str) -> Result<usize> {
    let upper = key.to_uppercase();
    let mut chars = upper.chars();
    let too_short = || AlphabetTableError::InvalidKeyLength {
        key: key.to_string(),
        length: upper.chars().count(),
    };

    let first = chars.next().ok_or_else(too_short)?;
    let (alphabet, first_index) = classify(first, 0)?;

    let second = chars.next().ok_or_else(too_short)?;
    let (_, second_index) = classify(second, 1)?;

    Ok(first_index * alphabet.size() + second_index)
}

/// Maps a hash value onto one of `capacity` buckets.
///
/// `capacity` must be non-zero; the table guarantees this at construction.
pub fn bucket_for(hash: usize, capacity: usize) -> usize {
    hash % capacity
}
