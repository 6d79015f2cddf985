//! Tests for the script module.
//!
//! Property-based checks of the command parser and of sessions built from
//! the application configuration.

use super::{key_strategy, keys_strategy};
use crate::config::TableConfig;
use crate::script::{parse_line, parse_script, Command, Outcome, Session};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Keyed commands render to text the parser reads back unchanged.
    #[test]
    fn prop_keyed_commands_round_trip(key in key_strategy()) {
        for command in [
            Command::Insert(key.clone()),
            Command::Remove(key.clone()),
            Command::Find(key.clone()),
        ] {
            prop_assert_eq!(parse_line(1, &command.to_string()), Ok(Some(command.clone())));
        }
    }

    /// A rendered script parses back to the same commands.
    #[test]
    fn prop_rendered_script_round_trips(keys in keys_strategy(30)) {
        let commands: Vec<Command> = keys.into_iter().map(Command::Insert).collect();
        let source = commands
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        prop_assert_eq!(parse_script(&source), Ok(commands));
    }

    /// Sessions accept each distinct key once and find every accepted key.
    #[test]
    fn prop_session_accepts_distinct_keys(keys in keys_strategy(40)) {
        let mut session = Session::from_config(&TableConfig::default()).unwrap();
        let mut members = HashSet::new();

        for key in &keys {
            let expected = members.insert(key.clone());
            match session.execute(&Command::Insert(key.clone())) {
                Outcome::Insert { accepted, .. } => prop_assert_eq!(accepted, expected),
                other => prop_assert!(false, "unexpected outcome {:?}", other),
            }
        }

        for key in &members {
            prop_assert_eq!(
                session.execute(&Command::Find(key.clone())),
                Outcome::Find { key: key.clone(), found: true }
            );
        }

        let table = session.table();
        prop_assert_eq!(table.size() + table.stash_len(), members.len());
        prop_assert_eq!(table.stats().undoable_insertions, members.len());
    }
}
