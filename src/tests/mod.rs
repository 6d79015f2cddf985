//! Test modules for Puka Cuckoo.
//!
//! This module contains the crate-internal test suites for the ambient layers
//! (configuration, error reporting and command scripts) together with shared fixtures and
//! proptest strategies. Table behaviour is tested next to the table itself and
//! in the `tests/` integration suite.

pub mod config_tests;
pub mod script_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{key_strategy, keys_strategy, TestFixture};
