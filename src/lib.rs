//! Alphabet Table Library
//!
//! This library contains a fixed-capacity hash table for keys that start
//! with two Latin or Cyrillic letters, plus the configuration and error
//! layers used by the `alphabet_table` command-line driver.
//!
//! # Architecture
//!
//! - `data_structures::alphabet_table` holds the table, its positional hash
//!   and the alphabet classifier. It has no dependency on the other modules.
//! - `config` loads driver settings from files and environment variables.
//! - `error` defines the application error type and tracing-based reporting.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Alphabet Table crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
