// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hash function families for the Puka Cuckoo Hash table.
//!
//! The table never hashes keys itself. It asks a [`HashFamily`] for the raw
//! value of hash function `i` and reduces it to a slot index. Two families are
//! provided: [`SeededHashFamily`], which seeds an FNV hasher differently for
//! every function, and [`FnHashFamily`], which adapts a closure and is mostly
//! useful for crafting collision patterns in tests.

use std::fmt;
use std::hash::{Hash, Hasher};

use fnv::FnvHasher;

/// Seeds for the default family, one per hash function.
#[allow(clippy::unreadable_literal)]
const HASH_SEEDS: [u64; 8] = [
    0x517cc1b727220a95, 0x83588256c732eb1f, 0xabe33b1c9b32d199, 0x4cf18d443988208f,
    0xd5c5778faf2a1ef1, 0xa22d34e45c79d3b5, 0xb3e52f89793f0af5, 0x9d1d10f8dd66cbcb,
];

/// Maximum number of functions [`SeededHashFamily`] can provide.
pub const MAX_HASH_FUNCTIONS: usize = HASH_SEEDS.len();

/// A family of `k` independent hash functions over keys of type `K`.
pub trait HashFamily<K: ?Sized> {
    /// Number of functions in the family.
    fn function_count(&self) -> usize;

    /// Raw value of function `index` for `key`, for `index` in `0..function_count()`.
    ///
    /// The value may be negative; the table reduces it with a non-negative modulo.
    fn hash(&self, key: &K, index: usize) -> i64;
}

/// Reduces a raw hash value to a slot index in `0..capacity`.
///
/// # Panics
///
/// Panics if `capacity` is zero. Tables always hold at least three cells.
pub fn reduce(hash: i64, capacity: usize) -> usize {
    hash.rem_euclid(capacity as i64) as usize
}

/// Computes a hash value for the given key with the specified seed.
pub fn hash_with_seed<K: Hash + ?Sized>(key: &K, seed: u64) -> u64 {
    let mut hasher = FnvHasher::with_key(seed);
    key.hash(&mut hasher);
    hasher.finish()
}

/// Default family: function `i` is FNV-1a keyed with its own seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededHashFamily {
    hash_count: usize,
}

impl SeededHashFamily {
    /// Creates a family of `hash_count` functions, clamped to `1..=8`.
    pub fn new(hash_count: usize) -> Self {
        Self {
            hash_count: hash_count.clamp(1, MAX_HASH_FUNCTIONS),
        }
    }
}

impl Default for SeededHashFamily {
    fn default() -> Self {
        Self::new(2)
    }
}

impl<K: Hash + ?Sized> HashFamily<K> for SeededHashFamily {
    fn function_count(&self) -> usize {
        self.hash_count
    }

    fn hash(&self, key: &K, index: usize) -> i64 {
        hash_with_seed(key, HASH_SEEDS[index % MAX_HASH_FUNCTIONS]) as i64
    }
}

/// Adapts a closure `Fn(&K, usize) -> i64` into a family of `hash_count` functions.
///
/// ```
/// use puka_cuckoo_lib::data_structures::puka_cuckoo_hash::{FnHashFamily, HashFamily};
///
/// // Every key collides on slot 7 for both functions.
/// let family = FnHashFamily::new(2, |_key: &String, _index: usize| -> i64 { 7 });
/// assert_eq!(HashFamily::<String>::function_count(&family), 2);
/// assert_eq!(family.hash(&"anything".to_string(), 1), 7);
/// ```
#[derive(Clone)]
pub struct FnHashFamily<F> {
    hash_count: usize,
    func: F,
}

impl<F> FnHashFamily<F> {
    /// Wraps `func` as a family of `hash_count` functions.
    pub fn new(hash_count: usize, func: F) -> Self {
        Self { hash_count, func }
    }
}

impl<F> fmt::Debug for FnHashFamily<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHashFamily")
            .field("hash_count", &self.hash_count)
            .finish_non_exhaustive()
    }
}

impl<K: ?Sized, F> HashFamily<K> for FnHashFamily<F>
where
    F: Fn(&K, usize) -> i64,
{
    fn function_count(&self) -> usize {
        self.hash_count
    }

    fn hash(&self, key: &K, index: usize) -> i64 {
        (self.func)(key, index)
    }
}
