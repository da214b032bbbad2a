// Copyright (c) 2025 Alphabet Table Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the Alphabet Table.

/// Default number of buckets.
pub const DEFAULT_CAPACITY: usize = 16;

/// Configuration for the Alphabet Table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetTableConfig {
    /// Number of buckets. Fixed for the lifetime of the table.
    pub capacity: usize,
}

impl AlphabetTableConfig {
    /// Creates a new configuration with default values.
    ///
    /// # Returns
    ///
    /// A new `AlphabetTableConfig` instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of buckets.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The number of buckets. Zero is rejected when the table is built.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for AlphabetTableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AlphabetTableConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(AlphabetTableConfig::new(), config);
    }

    #[test]
    fn test_with_capacity() {
        let config = AlphabetTableConfig::new().with_capacity(5);
        assert_eq!(config.capacity, 5);
    }
}
