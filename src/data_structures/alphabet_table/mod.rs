// Copyright (c) 2025 Alphabet Table Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Alphabet Table: a fixed-capacity hash table for letter-pair keys.
//!
//! Keys are hashed from their first two characters only. Both characters
//! must be letters of the uppercase Latin (A–Z) or Cyrillic (А–Я, Ё)
//! alphabet once the key is uppercased. Colliding keys share a bucket and
//! are searched linearly.
//!
//! # Features
//!
//! - Deterministic positional hash, identical across implementations.
//! - Fixed bucket count, no rehashing.
//! - Typed errors for unsupported characters and short keys.
//! - Diagnostic rendering of hashes, bucket indices and bucket contents.
//!
//! # Example
//!
//! ```
//! use alphabet_table_lib::data_structures::alphabet_table::{AlphabetTable, AlphabetTableError};
//!
//! let mut table = AlphabetTable::new(5).unwrap();
//!
//! table.insert("AB", "x").unwrap();
//! table.insert("AC", "y").unwrap();
//! table.insert("BA", "z").unwrap(); // 26 % 5 == 1, same bucket as "AB"
//!
//! assert_eq!(table.get("AB"), Ok(Some("x")));
//! assert_eq!(table.has_collision("AB"), Ok(true));
//! assert_eq!(table.has_collision("AC"), Ok(false));
//!
//! // Digits are in neither alphabet
//! assert!(matches!(
//!     table.hash_code("1X"),
//!     Err(AlphabetTableError::UnsupportedCharacter { .. })
//! ));
//! ```

// Module declarations
mod alphabet;
mod config;
mod error;
mod hash;
mod table;

// Re-exports
pub use alphabet::{classify, Alphabet, CYRILLIC, LATIN};
pub use config::{AlphabetTableConfig, DEFAULT_CAPACITY};
pub use error::{AlphabetTableError, Result};
pub use hash::{bucket_for, hash_code};
pub use table::{AlphabetTable, Entry};
