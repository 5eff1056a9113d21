//! Resolve command implementation.
//!
//! Resolves the ID-selected tasks. Normalisation strips the short ID on
//! the way out and the store moves each file into the resolved directory.
//! Trailing free text becomes a closing note, so `tsk resolve 3 deployed
//! in r1204` records how the task ended.

use chrono::Utc;

use tsk_core::vocab::{NON_RESOLVED_STATUSES, STATUS_RESOLVED};
use tsk_core::{CmdLine, GitRepo, Task, TaskStore};

use super::{commit_message, save_and_commit, tasks_for_ids, CommandContext, Result};

/// Executes the resolve command.
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
        resolve(&mut task, &cmd_line.text);
        let summary = task.summary.clone();
        set.upsert_task(task)?;
        println!("Resolved: {summary}");
    }

    save_and_commit(
        ctx,
        store,
        repo,
        &mut set,
        &commit_message("resolve", cmd_line),
    )
}

fn resolve(task: &mut Task, closing_note: &str) {
    task.status = STATUS_RESOLVED.to_string();
    task.resolved = Some(Utc::now());
    if !closing_note.is_empty() {
        task.append_note(closing_note);
    }
    // A task spawned from a recurring parent must not carry the rule on;
    // the parent keeps spawning, the spawn just ends.
    if !task.parent.is_empty() {
        task.schedule.clear();
    }
}
