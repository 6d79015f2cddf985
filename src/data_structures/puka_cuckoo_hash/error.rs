// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Puka Cuckoo Hash table.

/// Error types for Puka Cuckoo Hash operations
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PukaCuckooHashError {
    /// Every cell of the table is occupied
    #[error("Cuckoo hash table is full")]
    TableFull,

    /// Key already exists in the table, either in a cell or in the stash
    #[error("Key already exists in the table")]
    KeyExists,

    /// Configuration error
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for Puka Cuckoo Hash operations
pub type Result<T> = std::result::Result<T, PukaCuckooHashError>;
