// Copyright (c) 2025 Alphabet Table Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Alphabet Table.

/// Errors that can occur in Alphabet Table operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum AlphabetTableError {
    /// A leading key character is in neither the Latin nor the Cyrillic alphabet
    #[error("Unsupported {} character '{character}' at position {position}", position_name(.position))]
    UnsupportedCharacter {
        /// The offending character, already uppercased.
        character: char,
        /// Zero-based position of the character within the key.
        position: usize,
    },

    /// The key is too short to be hashed
    #[error("Key '{key}' has {length} character(s), at least 2 are required")]
    InvalidKeyLength {
        /// The rejected key.
        key: String,
        /// Number of characters in the uppercased key.
        length: usize,
    },

    /// The table was asked for zero buckets
    #[error("Invalid table capacity {0}, capacity must be greater than 0")]
    InvalidCapacity(usize),
}

fn position_name(position: &usize) -> &'static str {
    if *position == 0 {
        "key"
    } else {
        "second"
    }
}

/// Result type for Alphabet Table operations
pub type Result<T> = std::result::Result<T, AlphabetTableError>;
