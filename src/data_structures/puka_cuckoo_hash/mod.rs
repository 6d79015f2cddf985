// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Puka Cuckoo Hash: a fixed-capacity cuckoo hash set with a stash and undo.
//!
//! Every key has one candidate cell per function of a [`HashFamily`].
//! Insertion places the key in the first free candidate; when all of them are
//! taken it evicts an occupant and relocates it, possibly evicting again. A
//! walk that runs out of rounds or revisits a (cell, key) pair parks the key
//! in hand in an unbounded stash instead, so insertion only fails for a full
//! table or a duplicate key.
//!
//! # Features
//!
//! - Prime capacity, fixed at construction (no resizing)
//! - Pluggable hash families, including closures for crafted collision patterns
//! - Cycle detection per insertion
//! - Exact undo of the most recent insertion's displacement chain
//! - Zero unsafe code
//!
//! # Example
//!
//! ```
//! use puka_cuckoo_lib::data_structures::puka_cuckoo_hash::{FnHashFamily, PukaCuckooHash};
//!
//! // Both functions send every key to cell 5.
//! let family = FnHashFamily::new(2, |_key: &String, _index: usize| -> i64 { 5 });
//! let mut table = PukaCuckooHash::new(family);
//!
//! assert!(table.insert("a".to_string()));
//! assert!(table.insert("b".to_string())); // collides, ends in the stash
//! assert_eq!(table.size(), 1);            // stash entries are not counted
//! assert!(table.find(&"b".to_string()));
//!
//! assert_eq!(table.to_string(), "Index: 5 ,String: a\nOverflow[0] ,String: b\n");
//! ```
//!
//! # Undo
//!
//! Each insertion leaves its displacement chain on an undo log. [`PukaCuckooHash::undo`]
//! rewinds one chain at a time, newest first. Removing a key or emptying the
//! table clears the log.
//!
//! ```
//! use puka_cuckoo_lib::data_structures::puka_cuckoo_hash::{PukaCuckooHash, SeededHashFamily};
//!
//! let mut table = PukaCuckooHash::new(SeededHashFamily::default());
//! table.insert(1_u64);
//! table.insert(2_u64);
//! table.remove(&1);
//!
//! assert!(!table.undo()); // nothing left to rewind
//! assert!(table.find(&2));
//! ```

// Module declarations
mod config;
mod error;
mod hash;
mod prime;
mod stash;
mod table;
mod undo;

// Re-exports
pub use config::{PukaCuckooHashConfig, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use error::{PukaCuckooHashError, Result};
pub use hash::{hash_with_seed, reduce, FnHashFamily, HashFamily, SeededHashFamily, MAX_HASH_FUNCTIONS};
pub use prime::{is_prime, next_prime};
pub use stash::Stash;
pub use table::{Placement, PukaCuckooHash, TableStats};
pub use undo::{Destination, MoveRecord, Origin, UndoLog};

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(key: &String, index: usize) -> i64 {
        key.bytes().map(i64::from).sum::<i64>() * 10 + index as i64
    }

    #[test]
    fn test_basic_operations() {
        let family = FnHashFamily::new(2, letters);
        let mut table = PukaCuckooHash::new(family);

        for key in ["a", "b", "c"] {
            assert!(table.insert(key.to_string()));
        }
        assert_eq!(table.size(), 3);

        table.undo();
        assert_eq!(table.size(), 2);
        assert!(!table.find(&"c".to_string()));
        assert!(table.find(&"a".to_string()));
        assert!(table.find(&"b".to_string()));
    }

    #[test]
    fn test_deduplication() {
        let mut table = PukaCuckooHash::new(SeededHashFamily::default());

        assert!(table.insert("hello".to_string()));
        let before = table.to_string();

        assert!(!table.insert("hello".to_string()));
        assert_eq!(table.to_string(), before);
        assert_eq!(table.size(), 1);
    }

    #[test]
    fn test_full_table_rejects() {
        let family = FnHashFamily::new(1, |key: &u64, _: usize| -> i64 { *key as i64 });
        let mut table = PukaCuckooHash::with_capacity(family, 3);

        for key in 0..3_u64 {
            assert_eq!(table.try_insert(key), Ok(Placement::Cell(key as usize)));
        }
        assert_eq!(table.size(), table.capacity());
        assert_eq!(table.try_insert(3), Err(PukaCuckooHashError::TableFull));
        assert!(!table.find(&3));
        assert_eq!(table.stash_len(), 0);
    }
}
