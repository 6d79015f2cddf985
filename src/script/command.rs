//! Command parsing.
//!
//! A script holds one command per line. Blank lines and lines starting with
//! `#` are ignored, keywords are case-insensitive and keys are taken verbatim.

use std::fmt;

use crate::error::script::ScriptError;

/// Result type for script parsing.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// A single table operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a key.
    Insert(String),
    /// Remove a key.
    Remove(String),
    /// Test membership of a key.
    Find(String),
    /// Rewind the most recent insertion.
    Undo,
    /// Empty the table.
    Clear,
    /// Render the table contents.
    Dump,
    /// Report the occupied cell count.
    Size,
    /// Report the table counters.
    Stats,
}

impl Command {
    /// Keyword that introduces this command in a script.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Insert(_) => "insert",
            Command::Remove(_) => "remove",
            Command::Find(_) => "find",
            Command::Undo => "undo",
            Command::Clear => "clear",
            Command::Dump => "dump",
            Command::Size => "size",
            Command::Stats => "stats",
        }
    }

    /// Key argument, for the commands that take one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Command::Insert(key) | Command::Remove(key) | Command::Find(key) => Some(key),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key() {
            Some(key) => write!(f, "{} {key}", self.keyword()),
            None => f.write_str(self.keyword()),
        }
    }
}

/// Parses one script line. `line` is the 1-based line number used in errors.
///
/// Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: usize, text: &str) -> ScriptResult<Option<Command>> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let mut words = text.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };
    let keyword = word.to_ascii_lowercase();
    let argument = words.next();
    let extra = words.next();

    let command = match keyword.as_str() {
        "insert" | "remove" | "find" => {
            let key = argument.ok_or_else(|| ScriptError::MissingArgument {
                line,
                command: keyword.clone(),
            })?;
            let key = key.to_string();
            match keyword.as_str() {
                "insert" => Command::Insert(key),
                "remove" => Command::Remove(key),
                _ => Command::Find(key),
            }
        }
        "undo" => Command::Undo,
        "clear" => Command::Clear,
        "dump" => Command::Dump,
        "size" => Command::Size,
        "stats" => Command::Stats,
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: word.to_string(),
            })
        }
    };

    let unexpected = if command.key().is_some() { extra } else { argument };
    if let Some(argument) = unexpected {
        return Err(ScriptError::UnexpectedArgument {
            line,
            command: keyword,
            argument: argument.to_string(),
        });
    }

    Ok(Some(command))
}

/// Parses a whole script, stopping at the first invalid line.
pub fn parse_script(source: &str) -> ScriptResult<Vec<Command>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, text)| parse_line(index + 1, text).transpose())
        .collect()
}
