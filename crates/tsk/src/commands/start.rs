//! Start command implementation.
//!
//! Marks the ID-selected tasks active. Starting an already active task is
//! a no-op rather than an error, so `tsk start 3 4 5` is safe to repeat.

use tsk_core::vocab::{NON_RESOLVED_STATUSES, STATUS_ACTIVE};
use tsk_core::{CmdLine, GitRepo, TaskStore};

use super::{commit_message, save_and_commit, tasks_for_ids, CommandContext, Result};

/// Executes the start command.
///
/// # Errors
///
/// Returns a usage error when no IDs are given or an ID names no open
/// task, and storage or git errors from persisting the change.
pub fn execute(
    ctx: &CommandContext,
    store: &TaskStore,
    repo: &GitRepo,
    cmd_line: &CmdLine,
) -> Result<()> {
    let mut set = store.load_task_set(NON_RESOLVED_STATUSES)?;

    for mut task in tasks_for_ids(&set, cmd_line)? {
        task.status = STATUS_ACTIVE.to_string();
        let line = task.to_string();
        set.upsert_task(task)?;
        println!("Started: {line}");
    }

    save_and_commit(ctx, store, repo, &mut set, &commit_message("start", cmd_line))
}
