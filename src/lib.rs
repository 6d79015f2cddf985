//! Puka Cuckoo Library
//!
//! This library contains a fixed-capacity cuckoo hash table with an overflow
//! stash and an undoable displacement log, together with the configuration,
//! error handling and command-script layers used by the `puka_cuckoo` binary.
//!
//! # Architecture
//!
//! - [`data_structures::puka_cuckoo_hash`]: the table, its hash families and undo log
//! - [`script`]: parsing and executing text command scripts against a table
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`error`]: error types and tracing-based error reporting

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod script;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Puka Cuckoo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
