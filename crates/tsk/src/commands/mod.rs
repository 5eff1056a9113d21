//! Command implementations for the tsk CLI.
//!
//! Each submodule handles one command (or a pair of aliases). Commands
//! receive their dependencies from the dispatcher and never look at the
//! raw argument list; everything they need is in the parsed
//! [`CmdLine`](tsk_core::CmdLine).

pub mod add;
pub mod context;
pub mod edit;
pub mod help;
pub mod modify;
pub mod next;
pub mod note;
pub mod remove;
pub mod resolve;
pub mod show;
pub mod start;
pub mod stop;
pub mod sync;
pub mod undo;

use std::env;
use std::io::IsTerminal;

use tsk_core::{CmdLine, GitRepo, Task, TaskSet, TaskStore};

use crate::config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The command line does not fit the command.
    #[error("{0}")]
    Usage(String),

    /// The command line cannot be reconciled with the standing context.
    #[error("context conflict: {0}")]
    Context(#[from] tsk_core::ContextConflict),

    /// A task failed validation.
    #[error("invalid task: {0}")]
    Task(#[from] tsk_core::TaskError),

    /// Repository storage error.
    #[error("storage error: {0}")]
    Store(#[from] tsk_core::StoreError),

    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] tsk_core::GitError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML error outside the store, from the edit round-trip.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to print progress diagnostics to stderr.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from the loaded configuration.
    ///
    /// Colors default to whether stdout is a terminal; `NO_COLOR` wins
    /// over everything. `TSK_VERBOSE` turns diagnostics on without
    /// touching the config file.
    pub fn from_config(config: &Config) -> Self {
        let use_colors = if env::var_os("NO_COLOR").is_some() {
            false
        } else {
            config
                .output
                .color
                .unwrap_or_else(|| std::io::stdout().is_terminal())
        };
        Self {
            use_colors,
            verbose: config.output.verbose || env::var_os("TSK_VERBOSE").is_some(),
        }
    }
}

/// Resolves every ID on the command line to a task, cloned out of the set.
///
/// # Errors
///
/// Returns a usage error when the command line carries no IDs at all, or
/// when any ID does not name an open task.
pub fn tasks_for_ids(set: &TaskSet, cmd_line: &CmdLine) -> Result<Vec<Task>> {
    if cmd_line.ids.is_empty() {
        return Err(CommandError::Usage(
            "this command needs at least one task ID".to_string(),
        ));
    }
    let mut tasks = Vec::with_capacity(cmd_line.ids.len());
    for id in &cmd_line.ids {
        match set.task_by_id(*id) {
            Some(task) => tasks.push(task.clone()),
            None => {
                return Err(CommandError::Usage(format!("no open task with ID {id}")));
            }
        }
    }
    Ok(tasks)
}

/// Builds the commit message for a mutating command.
///
/// The message is the command word followed by the canonical rendering of
/// the command line, so the git log reads like a shell history.
pub fn commit_message(verb: &str, cmd_line: &CmdLine) -> String {
    let rendered = cmd_line.to_string();
    if rendered.is_empty() {
        verb.to_string()
    } else {
        format!("{verb} {rendered}")
    }
}

/// Saves pending writes and commits whatever changed in the tree.
///
/// Runs after every mutating command; when nothing is dirty the commit is
/// skipped, so calling it is always safe.
pub fn save_and_commit(
    ctx: &CommandContext,
    store: &TaskStore,
    repo: &GitRepo,
    set: &mut TaskSet,
    message: &str,
) -> Result<()> {
    let written = store.save(set)?;
    if ctx.verbose {
        eprintln!("{written} task file(s) written");
    }
    if repo.commit_all(message)? && ctx.verbose {
        eprintln!("committed: {message}");
    }
    Ok(())
}
