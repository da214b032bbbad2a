//! Test modules for the Alphabet Table crate.
//!
//! This module contains the crate-level test suites:
//! - Scenario tests for the table against worked examples
//! - Property-based tests against a reference map using proptest
//! - Configuration loading and validation tests
//! - Error formatting and reporting tests
//!
//! Unit tests for individual modules live next to the code they test.

pub mod config_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{invalid_key_strategy, key_strategy, operation_strategy, Operation};
