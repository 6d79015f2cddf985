//! Data structures for Puka Cuckoo.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Single-threaded, `&mut self` mutation
//! - Deterministic, bounded work per operation

pub mod puka_cuckoo_hash;

// Re-export common data structures
pub use puka_cuckoo_hash::{PukaCuckooHash, PukaCuckooHashConfig, PukaCuckooHashError};
