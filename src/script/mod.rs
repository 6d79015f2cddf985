//! Command scripts for driving a table from text.
//!
//! ```
//! use puka_cuckoo_lib::config::TableConfig;
//! use puka_cuckoo_lib::script::{parse_script, Outcome, Session};
//!
//! let commands = parse_script("insert a\ninsert a\n# comment\nundo\nfind a\n").unwrap();
//! let mut session = Session::from_config(&TableConfig::default()).unwrap();
//! let outcomes = session.run(&commands);
//!
//! assert_eq!(outcomes.len(), 4);
//! assert_eq!(outcomes[3], Outcome::Find { key: "a".to_string(), found: false });
//! ```

mod command;
mod session;

pub use command::{parse_line, parse_script, Command, ScriptResult};
pub use session::{Outcome, Session};
