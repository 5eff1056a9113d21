//! Command-line query language: tokenizer, canonical rendering and the
//! standing-context merge.
//!
//! Every `tsk` invocation is a flat list of tokens. There is no flag
//! grammar; each token is classified on its own by shape, so attributes,
//! IDs and free text can be mixed in any order.
//!
//! # Token Shapes
//!
//! ## Commands and IDs
//! - `add`, `resolve`, ... - first recognised word becomes the command
//! - `42`, `-3` - base-10 integers collect as task IDs, until the first
//!   token that is neither a command nor an integer
//!
//! ## Attributes
//! - `+tag` / `-tag` - require / exclude a tag
//! - `project:name` or `+project:name` - set the project
//! - `-project:name` - exclude a project
//! - `P0`..`P3` - priority, case sensitive
//!
//! ## Keywords
//! - `--` - ignore the standing context for this invocation
//! - `/` - everything after it is note text instead of summary text
//!
//! Anything else is free text, joined with single spaces.
//!
//! # Example
//!
//! ```
//! use tsk_core::query::parse_cmd_line;
//!
//! let cmd_line = parse_cmd_line(["resolve", "42", "+work", "urgent", "fix"]);
//! assert_eq!(cmd_line.cmd.as_deref(), Some("resolve"));
//! assert_eq!(cmd_line.ids, vec![42]);
//! assert_eq!(cmd_line.tags, vec!["work"]);
//! assert_eq!(cmd_line.text, "urgent fix");
//! ```

mod classifier;
mod cmdline;
mod context;

pub use classifier::parse_cmd_line;
pub use cmdline::CmdLine;
pub use context::ContextConflict;
