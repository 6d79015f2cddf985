//! Table configuration module.
//!
//! Settings for the hash table the CLI builds: requested capacity and the
//! number of hash functions of the default seeded family.

use super::{ConfigResult, Validate};
use crate::data_structures::puka_cuckoo_hash::{
    PukaCuckooHashConfig, DEFAULT_CAPACITY, MAX_CAPACITY, MAX_HASH_FUNCTIONS,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Table configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Requested number of cells, rounded up to a prime
    pub capacity: usize,

    /// Number of hash functions per key
    pub hash_functions: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            hash_functions: 2,
        }
    }
}

impl Validate for TableConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.capacity == 0 {
            return Err(ConfigError::ValidationError(
                "capacity must be greater than 0".to_string(),
            ));
        }

        if self.capacity > MAX_CAPACITY {
            return Err(ConfigError::ValueOutOfRange {
                key: "table.capacity".to_string(),
                message: format!("must be at most {MAX_CAPACITY}"),
            });
        }

        if !(1..=MAX_HASH_FUNCTIONS).contains(&self.hash_functions) {
            return Err(ConfigError::ValueOutOfRange {
                key: "table.hash_functions".to_string(),
                message: format!("must be between 1 and {MAX_HASH_FUNCTIONS}"),
            });
        }

        Ok(())
    }
}

impl From<&TableConfig> for PukaCuckooHashConfig {
    fn from(config: &TableConfig) -> Self {
        PukaCuckooHashConfig::new()
            .with_capacity(config.capacity)
            .with_hash_function_count(config.hash_functions)
    }
}
