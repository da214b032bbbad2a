//! Data structures for the Alphabet Table crate.
//!
//! This module contains the hash table and the alphabet-aware hashing it is
//! built on. All implementations adhere to the project requirements:
//! - No unsafe code
//! - Typed, recoverable errors instead of panics
//! - Deterministic behaviour for identical inputs

pub mod alphabet_table;

// Re-export common data structures
pub use alphabet_table::{AlphabetTable, AlphabetTableError};
