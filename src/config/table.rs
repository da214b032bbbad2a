//! Table configuration module.
//!
//! Settings for the table the driver builds.

use super::ConfigResult;
use super::Validate;
use crate::data_structures::alphabet_table::{AlphabetTableConfig, DEFAULT_CAPACITY};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Table configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of buckets in the table
    pub capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl TableConfig {
    /// Converts these settings into the table's own configuration.
    pub fn to_table_config(&self) -> AlphabetTableConfig {
        AlphabetTableConfig::new().with_capacity(self.capacity)
    }
}

impl Validate for TableConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.capacity == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "table.capacity".to_string(),
                message: "capacity must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
