// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the Puka Cuckoo Hash table.

use crate::data_structures::puka_cuckoo_hash::error::{PukaCuckooHashError, Result};
use crate::data_structures::puka_cuckoo_hash::hash::MAX_HASH_FUNCTIONS;

/// Requested capacity used when none is given.
pub const DEFAULT_CAPACITY: usize = 101;

/// Largest requested capacity a configuration accepts.
pub const MAX_CAPACITY: usize = 1 << 28;

/// Configuration for a table built over the default seeded hash family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PukaCuckooHashConfig {
    /// Requested number of cells. The table rounds this up to a prime.
    pub capacity: usize,

    /// Number of hash functions, and therefore candidate cells per key.
    pub hash_function_count: usize,
}

impl PukaCuckooHashConfig {
    /// Creates a new configuration with default values.
    ///
    /// # Returns
    ///
    /// A new `PukaCuckooHashConfig` instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requested capacity.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Requested number of cells, rounded up to a prime by the table.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the number of hash functions to use.
    ///
    /// # Arguments
    ///
    /// * `hash_function_count` - The number of hash functions (1 to 8).
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_hash_function_count(mut self, hash_function_count: usize) -> Self {
        self.hash_function_count = hash_function_count;
        self
    }

    /// Checks that the configuration describes a usable table.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(PukaCuckooHashError::InvalidConfiguration(
                "capacity must be greater than 0".to_string(),
            ));
        }

        if self.capacity > MAX_CAPACITY {
            return Err(PukaCuckooHashError::InvalidConfiguration(format!(
                "capacity must be at most {MAX_CAPACITY}, got {}",
                self.capacity
            )));
        }

        if !(1..=MAX_HASH_FUNCTIONS).contains(&self.hash_function_count) {
            return Err(PukaCuckooHashError::InvalidConfiguration(format!(
                "hash_function_count must be between 1 and {MAX_HASH_FUNCTIONS}, got {}",
                self.hash_function_count
            )));
        }

        Ok(())
    }
}

impl Default for PukaCuckooHashConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            hash_function_count: 2, // Standard cuckoo hashing uses 2 hash functions
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PukaCuckooHashConfig::default();
        assert_eq!(config.capacity, 101);
        assert_eq!(config.hash_function_count, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = PukaCuckooHashConfig::new().with_capacity(0);
        assert!(matches!(
            config.validate(),
            Err(PukaCuckooHashError::InvalidConfiguration(_))
        ));

        let config = PukaCuckooHashConfig::new().with_capacity(MAX_CAPACITY + 1);
        assert!(config.validate().is_err());

        let config = PukaCuckooHashConfig::new().with_capacity(usize::MAX);
        assert!(config.validate().is_err());

        let config = PukaCuckooHashConfig::new().with_capacity(MAX_CAPACITY);
        assert!(config.validate().is_ok());

        let config = PukaCuckooHashConfig::new().with_hash_function_count(0);
        assert!(config.validate().is_err());

        let config = PukaCuckooHashConfig::new().with_hash_function_count(9);
        assert!(config.validate().is_err());

        let config = PukaCuckooHashConfig::new()
            .with_capacity(17)
            .with_hash_function_count(8);
        assert!(config.validate().is_ok());
    }
}
