//! Command script error module.
//!
//! Errors raised while turning a command script into [`Command`](crate::script::Command)s.
//! Line numbers are 1-based.

use thiserror::Error;

/// Errors that can occur while parsing a command script.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ScriptError {
    /// The first word of a line is not a known command.
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand {
        /// Line of the script
        line: usize,
        /// The unrecognized word
        command: String,
    },

    /// A command that takes a key was given none.
    #[error("line {line}: `{command}` requires a key")]
    MissingArgument {
        /// Line of the script
        line: usize,
        /// The command missing its key
        command: String,
    },

    /// A command was followed by more words than it accepts.
    #[error("line {line}: unexpected argument `{argument}` after `{command}`")]
    UnexpectedArgument {
        /// Line of the script
        line: usize,
        /// The command
        command: String,
        /// The first extra word
        argument: String,
    },
}
