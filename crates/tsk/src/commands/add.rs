//! Add and log command implementations.
//!
//! `add` creates a pending task from the command line's attributes; `log`
//! is the same construction but born resolved, for recording work that
//! was done outside the tracker. The merged context has already been
//! folded into the command line, so a standing `project:acme +work` tags
//! and files new tasks automatically.

use chrono::Utc;
use uuid::Uuid;

use tsk_core::vocab::{NON_RESOLVED_STATUSES, STATUS_PENDING, STATUS_RESOLVED};
use tsk_core::{CmdLine, GitRepo, Task, TaskStore};

use super::{commit_message, save_and_commit, CommandContext, CommandError, Result};

/// Executes the add command, or the log command when `log` is set.
///
/// # Errors
///
/// Returns a usage error when there is no summary text, and storage or
/// git errors from persisting the new task.
pub fn execute(
    ctx: &CommandContext,
    store: &TaskStore,
    repo: &GitRepo,
    cmd_line: &CmdLine,
    log: bool,
) -> Result<()> {
    if cmd_line.text.is_empty() {
        return Err(CommandError::Usage(
            "a new task needs summary text".to_string(),
        ));
    }
    let verb = if log { "log" } else { "add" };

    let mut set = store.load_task_set(NON_RESOLVED_STATUSES)?;
    let task = task_from_cmd_line(cmd_line, log);
    let created = set.add_task(task)?.clone();

    save_and_commit(ctx, store, repo, &mut set, &commit_message(verb, cmd_line))?;

    if log {
        println!("Logged: {}", created.summary);
    } else {
        println!("Created: {created}");
    }
    Ok(())
}

/// Builds the new task from the classified command line.
fn task_from_cmd_line(cmd_line: &CmdLine, log: bool) -> Task {
    let status = if log { STATUS_RESOLVED } else { STATUS_PENDING };
    Task {
        uuid: Uuid::new_v4().to_string(),
        status: status.to_string(),
        summary: cmd_line.text.clone(),
        notes: cmd_line.note.clone(),
        tags: cmd_line.tags.clone(),
        project: cmd_line.project.clone().unwrap_or_default(),
        priority: cmd_line.priority.clone().unwrap_or_default(),
        created: Some(Utc::now()),
        resolved: log.then(Utc::now),
        ..Task::default()
    }
}
