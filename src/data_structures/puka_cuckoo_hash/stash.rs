// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Overflow stash for keys the displacement walk could not place.

/// Ordered, unbounded list of table members that live outside the cell array.
///
/// Lookups are linear scans, which is acceptable because the stash only holds
/// keys that defeated the retry budget or closed a cycle.
#[derive(Debug, Clone)]
pub struct Stash<K> {
    entries: Vec<K>,
}

impl<K> Default for Stash<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K> Stash<K> {
    /// Creates an empty stash.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a key at the end of the stash.
    pub fn push(&mut self, key: K) {
        self.entries.push(key);
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stashed keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the stash holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stashed keys in insertion order.
    pub fn as_slice(&self) -> &[K] {
        &self.entries
    }
}

impl<K: PartialEq> Stash<K> {
    /// Position of the first entry equal to `key`.
    pub fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|entry| entry == key)
    }

    /// Returns `true` if `key` is in the stash.
    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Removes the first entry equal to `key`, keeping the order of the rest.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        self.position(key).map(|index| self.entries.remove(index))
    }
}
