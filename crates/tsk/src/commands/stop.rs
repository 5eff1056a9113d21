//! Stop command implementation.
//!
//! Marks the ID-selected tasks paused: set aside, but distinct from the
//! pending pile, so `show-paused` can find them again.

use tsk_core::vocab::{NON_RESOLVED_STATUSES, STATUS_PAUSED};
use tsk_core::{CmdLine, GitRepo, TaskStore};

use super::{commit_message, save_and_commit, tasks_for_ids, CommandContext, Result};

/// Executes the stop command.
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
        task.status = STATUS_PAUSED.to_string();
        let line = task.to_string();
        set.upsert_task(task)?;
        println!("Stopped: {line}");
    }

    save_and_commit(ctx, store, repo, &mut set, &commit_message("stop", cmd_line))
}
