//! Command execution against a table.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::TableConfig;
use crate::data_structures::puka_cuckoo_hash::{
    HashFamily, Placement, PukaCuckooHash, PukaCuckooHashConfig, SeededHashFamily, TableStats,
};
use crate::error::PukaResult;
use crate::script::command::Command;

/// Result of executing one [`Command`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Outcome {
    /// Insertion result. `reason` explains a rejection.
    Insert {
        /// The key
        key: String,
        /// Whether the key was accepted
        accepted: bool,
        /// Where the key's displacement chain ended
        #[serde(skip_serializing_if = "Option::is_none")]
        placement: Option<Placement>,
        /// Why the key was rejected
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    /// Removal result.
    Remove {
        /// The key
        key: String,
        /// Whether the key was a member
        removed: bool,
    },
    /// Membership result.
    Find {
        /// The key
        key: String,
        /// Whether the key is a member
        found: bool,
    },
    /// Whether an insertion was rewound.
    Undo {
        /// `false` when the undo log was empty
        undone: bool,
    },
    /// The table was emptied.
    Clear,
    /// Rendered table contents.
    Dump {
        /// One line per occupied cell, then one per stash entry
        text: String,
    },
    /// Occupied cell count.
    Size {
        /// Occupied cells
        size: usize,
        /// Total cells
        capacity: usize,
    },
    /// Table counters.
    Stats(TableStats),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Insert {
                key,
                accepted,
                placement,
                reason,
            } => {
                write!(f, "insert {key} -> {accepted}")?;
                match (placement, reason) {
                    (Some(Placement::Cell(index)), _) => write!(f, " (cell {index})"),
                    (Some(Placement::Stash), _) => write!(f, " (stash)"),
                    (None, Some(reason)) => write!(f, " ({reason})"),
                    (None, None) => Ok(()),
                }
            }
            Outcome::Remove { key, removed } => write!(f, "remove {key} -> {removed}"),
            Outcome::Find { key, found } => write!(f, "find {key} -> {found}"),
            Outcome::Undo { undone } => write!(f, "undo -> {undone}"),
            Outcome::Clear => write!(f, "clear"),
            Outcome::Dump { text } => write!(f, "{}", text.trim_end()),
            Outcome::Size { size, capacity } => write!(f, "size -> {size}/{capacity}"),
            Outcome::Stats(stats) => write!(
                f,
                "stats -> capacity={} size={} stash={} undo_depth={} undoable={} load_factor={:.3}",
                stats.capacity,
                stats.size,
                stats.stash_len,
                stats.undo_depth,
                stats.undoable_insertions,
                stats.load_factor
            ),
        }
    }
}

/// A table of string keys driven by commands.
#[derive(Debug)]
pub struct Session<H = SeededHashFamily> {
    table: PukaCuckooHash<String, H>,
}

impl<H: HashFamily<String>> Session<H> {
    /// Wraps an existing table.
    pub fn new(table: PukaCuckooHash<String, H>) -> Self {
        Self { table }
    }

    /// The underlying table.
    pub fn table(&self) -> &PukaCuckooHash<String, H> {
        &self.table
    }

    /// Executes a single command.
    pub fn execute(&mut self, command: &Command) -> Outcome {
        debug!(%command, "executing command");
        match command {
            Command::Insert(key) => match self.table.try_insert(key.clone()) {
                Ok(placement) => Outcome::Insert {
                    key: key.clone(),
                    accepted: true,
                    placement: Some(placement),
                    reason: None,
                },
                Err(err) => Outcome::Insert {
                    key: key.clone(),
                    accepted: false,
                    placement: None,
                    reason: Some(err.to_string()),
                },
            },
            Command::Remove(key) => Outcome::Remove {
                key: key.clone(),
                removed: self.table.remove(key),
            },
            Command::Find(key) => Outcome::Find {
                key: key.clone(),
                found: self.table.find(key),
            },
            Command::Undo => Outcome::Undo {
                undone: self.table.undo(),
            },
            Command::Clear => {
                self.table.make_empty();
                Outcome::Clear
            }
            Command::Dump => Outcome::Dump {
                text: self.table.to_string(),
            },
            Command::Size => Outcome::Size {
                size: self.table.size(),
                capacity: self.table.capacity(),
            },
            Command::Stats => Outcome::Stats(self.table.stats()),
        }
    }

    /// Executes commands in order and collects their outcomes.
    pub fn run<'a, I>(&mut self, commands: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = &'a Command>,
    {
        commands
            .into_iter()
            .map(|command| self.execute(command))
            .collect()
    }
}

impl Session<SeededHashFamily> {
    /// Builds a session over the default seeded family.
    ///
    /// # Errors
    ///
    /// Fails if the table configuration is invalid.
    pub fn from_config(config: &TableConfig) -> PukaResult<Self> {
        let table = PukaCuckooHash::with_config(&PukaCuckooHashConfig::from(config))?;
        Ok(Self::new(table))
    }
}
