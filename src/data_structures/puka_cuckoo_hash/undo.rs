// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Move records and the undo log.
//!
//! Every insertion leaves a displacement chain on the log: one record per
//! eviction, then a final record for the cell or stash entry where the chain
//! ended. The first record of a chain has origin [`Origin::StartOfChain`].
//! Replaying records newest-first and writing each key back to its origin
//! restores every cell the insertion touched.

/// Where a key was moved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// A slot in the cell array.
    Cell(usize),
    /// The overflow stash.
    Stash,
}

/// Where a key was before it was moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The cell the key was evicted from.
    Cell(usize),
    /// The key is the one the insertion started with.
    StartOfChain,
}

/// A single key movement produced during insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord<K> {
    /// The key that moved.
    pub key: K,
    /// Where the key ended up.
    pub destination: Destination,
    /// Where the key came from.
    pub origin: Origin,
}

impl<K> MoveRecord<K> {
    /// Creates a new record.
    pub fn new(key: K, destination: Destination, origin: Origin) -> Self {
        Self {
            key,
            destination,
            origin,
        }
    }

    /// Returns `true` if this record opens a displacement chain.
    pub fn starts_chain(&self) -> bool {
        self.origin == Origin::StartOfChain
    }
}

/// Last-in-first-out stack of move records.
#[derive(Debug, Clone)]
pub struct UndoLog<K> {
    records: Vec<MoveRecord<K>>,
}

impl<K> Default for UndoLog<K> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<K> UndoLog<K> {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&mut self, record: MoveRecord<K>) {
        self.records.push(record);
    }

    /// Removes and returns the most recent record.
    pub fn pop(&mut self) -> Option<MoveRecord<K>> {
        self.records.pop()
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of complete chains on the log, that is, the number of
    /// insertions that can still be undone.
    pub fn chain_count(&self) -> usize {
        self.records.iter().filter(|r| r.starts_chain()).count()
    }

    /// Iterates over records from oldest to newest.
    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord<K>> {
        self.records.iter()
    }
}
