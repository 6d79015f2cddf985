// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the Puka Cuckoo Hash table.
//!
//! The table owns a fixed array of cells, an overflow stash and an undo log.
//! Insertion walks a displacement chain: the key in hand tries each of its
//! candidate cells, and when all of them are taken it evicts the occupant of a
//! kick cell and continues with the evicted key. The walk ends in an empty
//! cell, or in the stash once the retry budget is spent or a cycle shows up.

use std::fmt;
use std::hash::Hash;

use fnv::FnvHashMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::data_structures::puka_cuckoo_hash::config::{
    PukaCuckooHashConfig, DEFAULT_CAPACITY, MAX_CAPACITY,
};
use crate::data_structures::puka_cuckoo_hash::error::{PukaCuckooHashError, Result};
use crate::data_structures::puka_cuckoo_hash::hash::{reduce, HashFamily, SeededHashFamily};
use crate::data_structures::puka_cuckoo_hash::prime::next_prime;
use crate::data_structures::puka_cuckoo_hash::stash::Stash;
use crate::data_structures::puka_cuckoo_hash::undo::{Destination, MoveRecord, Origin, UndoLog};

/// Where an accepted key ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// The displacement chain ended in an empty cell.
    Cell(usize),
    /// The chain was cut short and the key in hand went to the stash.
    Stash,
}

/// Point-in-time counters of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableStats {
    /// Number of cells.
    pub capacity: usize,
    /// Number of occupied cells.
    pub size: usize,
    /// Number of stashed keys.
    pub stash_len: usize,
    /// Number of records on the undo log.
    pub undo_depth: usize,
    /// Number of insertions `undo` can still rewind.
    pub undoable_insertions: usize,
    /// `size / capacity`.
    pub load_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    Cell(usize),
    Stash,
}

/// Remembers which (cell, key) pairs one insertion has already tried.
struct CycleGuard<K> {
    seen: FnvHashMap<usize, Vec<K>>,
}

impl<K: PartialEq + Clone> CycleGuard<K> {
    fn new() -> Self {
        Self {
            seen: FnvHashMap::default(),
        }
    }

    /// Records the attempt. Returns `false` if it was made before.
    fn visit(&mut self, slot: usize, key: &K) -> bool {
        let keys = self.seen.entry(slot).or_default();
        if keys.contains(key) {
            false
        } else {
            keys.push(key.clone());
            true
        }
    }
}

/// A fixed-capacity cuckoo hash set with a stash and an undo log.
///
/// `size()` counts occupied cells only; stashed keys are members (`find`
/// reports them) but are not included.
///
/// # Type Parameters
///
/// * `K` - The key type.
/// * `H` - The hash family providing the candidate cells of a key.
///
/// # Examples
///
/// ```
/// use puka_cuckoo_lib::data_structures::puka_cuckoo_hash::{PukaCuckooHash, SeededHashFamily};
///
/// let mut table = PukaCuckooHash::new(SeededHashFamily::new(2));
/// assert_eq!(table.capacity(), 101);
///
/// assert!(table.insert("a".to_string()));
/// assert!(!table.insert("a".to_string()));
/// assert!(table.find(&"a".to_string()));
///
/// table.undo();
/// assert!(!table.find(&"a".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct PukaCuckooHash<K, H = SeededHashFamily> {
    slots: Vec<Option<K>>,
    size: usize,
    stash: Stash<K>,
    undo_log: UndoLog<K>,
    family: H,
}

impl<K, H> PukaCuckooHash<K, H>
where
    K: Eq + Clone,
    H: HashFamily<K>,
{
    /// Creates an empty table with the default requested capacity (101).
    pub fn new(family: H) -> Self {
        Self::with_capacity(family, DEFAULT_CAPACITY)
    }

    /// Creates an empty table whose capacity is the next prime at or above
    /// `requested` (see [`next_prime`]). Requests above [`MAX_CAPACITY`] are
    /// clamped to it.
    pub fn with_capacity(family: H, requested: usize) -> Self {
        let capacity = next_prime(requested.min(MAX_CAPACITY));
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            size: 0,
            stash: Stash::new(),
            undo_log: UndoLog::new(),
            family,
        }
    }

    /// Number of occupied cells. Stashed keys are not counted.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no key is held in a cell or in the stash.
    pub fn is_empty(&self) -> bool {
        self.size == 0 && self.stash.is_empty()
    }

    /// Number of stashed keys.
    pub fn stash_len(&self) -> usize {
        self.stash.len()
    }

    /// Stashed keys in the order they were stashed.
    pub fn stash(&self) -> &[K] {
        self.stash.as_slice()
    }

    /// Number of records on the undo log.
    pub fn undo_depth(&self) -> usize {
        self.undo_log.len()
    }

    /// The undo log, oldest record first.
    pub fn undo_log(&self) -> &UndoLog<K> {
        &self.undo_log
    }

    /// The hash family this table was built with.
    pub fn hash_family(&self) -> &H {
        &self.family
    }

    /// Occupied cells as `(index, key)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &K)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|key| (index, key)))
    }

    /// Fraction of cells occupied.
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Snapshot of the table counters.
    pub fn stats(&self) -> TableStats {
        TableStats {
            capacity: self.capacity(),
            size: self.size,
            stash_len: self.stash.len(),
            undo_depth: self.undo_log.len(),
            undoable_insertions: self.undo_log.chain_count(),
            load_factor: self.load_factor(),
        }
    }

    /// Inserts `key`, returning `false` if the table is full or the key is
    /// already a member.
    ///
    /// A key that cannot be placed in a cell goes to the stash; that still
    /// counts as a successful insertion.
    pub fn insert(&mut self, key: K) -> bool {
        self.try_insert(key).is_ok()
    }

    /// Inserts `key` and reports where the displacement chain ended.
    ///
    /// # Errors
    ///
    /// * [`PukaCuckooHashError::TableFull`] if every cell is occupied.
    /// * [`PukaCuckooHashError::KeyExists`] if the key is already a member.
    ///
    /// Neither error changes the table.
    pub fn try_insert(&mut self, key: K) -> Result<Placement> {
        if self.size == self.capacity() {
            return Err(PukaCuckooHashError::TableFull);
        }
        if self.find(&key) {
            return Err(PukaCuckooHashError::KeyExists);
        }

        Ok(self.displace(key))
    }

    /// Runs the displacement walk for a key known to be absent.
    ///
    /// At most `size + 1` rounds are played, with `size` read once on entry.
    fn displace(&mut self, key: K) -> Placement {
        let max_tries = self.size;
        let hash_count = self.family.function_count();
        let mut guard = CycleGuard::new();

        let mut current = key;
        let mut origin = Origin::StartOfChain;
        let mut kick: Option<usize> = None;
        let mut cyclic = false;

        if hash_count > 0 {
            'rounds: for round in 0..=max_tries {
                let mut last = None;
                for index in 0..hash_count {
                    let slot = self.slot(&current, index);
                    if !guard.visit(slot, &current) {
                        cyclic = true;
                        break 'rounds;
                    }
                    if self.slots[slot].is_none() {
                        return self.place(current, slot, origin);
                    }
                    last = Some(slot);
                }

                // The first round, and any round whose last candidate is the
                // cell the key was just evicted from, kicks at function 0.
                let target = match (kick, last) {
                    (Some(previous), Some(candidate)) if candidate != previous => candidate,
                    _ => self.slot(&current, 0),
                };

                trace!(round, slot = target, "evicting occupant");
                self.undo_log.push(MoveRecord::new(
                    current.clone(),
                    Destination::Cell(target),
                    origin,
                ));

                match self.slots[target].replace(current) {
                    Some(evicted) => {
                        current = evicted;
                        origin = Origin::Cell(target);
                        kick = Some(target);
                    }
                    None => {
                        self.size += 1;
                        return Placement::Cell(target);
                    }
                }
            }
        }

        debug!(
            cyclic,
            max_tries,
            stash_len = self.stash.len() + 1,
            "displacement chain ended in the stash"
        );
        self.undo_log
            .push(MoveRecord::new(current.clone(), Destination::Stash, origin));
        self.stash.push(current);
        Placement::Stash
    }

    fn place(&mut self, key: K, slot: usize, origin: Origin) -> Placement {
        self.undo_log
            .push(MoveRecord::new(key.clone(), Destination::Cell(slot), origin));
        self.slots[slot] = Some(key);
        self.size += 1;
        debug!(slot, size = self.size, "key placed");
        Placement::Cell(slot)
    }

    /// Reverses the most recent insertion still on the undo log.
    ///
    /// Every cell touched by that insertion gets its previous occupant back,
    /// and a key it stashed leaves the stash. Calling `undo` again unwinds the
    /// insertion before it. Returns `false` when the log is empty, which is
    /// always the case right after [`remove`](Self::remove) or
    /// [`make_empty`](Self::make_empty).
    pub fn undo(&mut self) -> bool {
        let Some(mut record) = self.undo_log.pop() else {
            return false;
        };

        if let Destination::Cell(slot) = record.destination {
            self.slots[slot] = None;
            self.size -= 1;
        }

        let mut restored = 0_usize;
        loop {
            let MoveRecord {
                key,
                destination,
                origin,
            } = record;

            if destination == Destination::Stash {
                self.stash.remove(&key);
            }

            let Origin::Cell(slot) = origin else {
                break;
            };
            self.slots[slot] = Some(key);
            restored += 1;

            match self.undo_log.pop() {
                Some(next) => record = next,
                None => break,
            }
        }

        debug!(
            restored,
            remaining = self.undo_log.len(),
            "insertion undone"
        );
        true
    }

    /// Returns `true` if `key` sits in one of its candidate cells or in the stash.
    #[doc(alias = "contains")]
    pub fn find(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    /// Removes `key`, returning `false` if it is not a member.
    ///
    /// The undo log is cleared whether or not the key was found: positions
    /// recorded before a removal cannot be replayed safely.
    pub fn remove(&mut self, key: &K) -> bool {
        let removed = match self.locate(key) {
            Some(Location::Cell(slot)) => {
                self.slots[slot] = None;
                self.size -= 1;
                true
            }
            Some(Location::Stash) => self.stash.remove(key).is_some(),
            None => false,
        };

        self.clear_undo_log();
        removed
    }

    /// Empties every cell and the stash, and clears the undo log.
    pub fn make_empty(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.stash.clear();
        self.size = 0;
        self.clear_undo_log();
    }

    fn clear_undo_log(&mut self) {
        if !self.undo_log.is_empty() {
            debug!(dropped = self.undo_log.len(), "undo log cleared");
        }
        self.undo_log.clear();
    }

    fn locate(&self, key: &K) -> Option<Location> {
        for index in 0..self.family.function_count() {
            let slot = self.slot(key, index);
            if self.slots[slot].as_ref() == Some(key) {
                return Some(Location::Cell(slot));
            }
        }

        if self.stash.contains(key) {
            Some(Location::Stash)
        } else {
            None
        }
    }

    fn slot(&self, key: &K, index: usize) -> usize {
        reduce(self.family.hash(key, index), self.slots.len())
    }
}

impl<K> PukaCuckooHash<K, SeededHashFamily>
where
    K: Eq + Clone + Hash,
{
    /// Creates a table over the default seeded family from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PukaCuckooHashError::InvalidConfiguration`] if the
    /// configuration does not validate.
    pub fn with_config(config: &PukaCuckooHashConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_capacity(
            SeededHashFamily::new(config.hash_function_count),
            config.capacity,
        ))
    }
}

/// One line per occupied cell (`Index: i ,String: key`), then one line per
/// stash entry (`Overflow[j] ,String: key`).
impl<K: fmt::Display, H> fmt::Display for PukaCuckooHash<K, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(key) = slot {
                writeln!(f, "Index: {index} ,String: {key}")?;
            }
        }
        for (index, key) in self.stash.as_slice().iter().enumerate() {
            writeln!(f, "Overflow[{index}] ,String: {key}")?;
        }
        Ok(())
    }
}
