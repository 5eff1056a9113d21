//! Remove command implementation.
//!
//! Deletes the ID-selected tasks outright, file and all. Unlike
//! `resolve` this keeps no record beyond the git history, which is also
//! what makes it reversible with `tsk undo`.

use tsk_core::vocab::NON_RESOLVED_STATUSES;
use tsk_core::{CmdLine, GitRepo, TaskStore};

use super::{commit_message, save_and_commit, tasks_for_ids, CommandContext, Result};

/// Executes the remove command.
///
/// # Errors
///
/// Returns a usage error when no IDs are given or an ID names no open
/// task, and storage or git errors from deleting the files.
pub fn execute(
    ctx: &CommandContext,
    store: &TaskStore,
    repo: &GitRepo,
    cmd_line: &CmdLine,
) -> Result<()> {
    let mut set = store.load_task_set(NON_RESOLVED_STATUSES)?;

    for task in tasks_for_ids(&set, cmd_line)? {
        store.delete_task(&task)?;
        set.remove_task(&task.uuid);
        println!("Removed: {task}");
    }

    save_and_commit(
        ctx,
        store,
        repo,
        &mut set,
        &commit_message("remove", cmd_line),
    )
}
