//! Note command implementation.
//!
//! With text, appends one note line to each ID-selected task. Without
//! text, prints the selected tasks' notes instead, so `tsk note 3` reads
//! and `tsk note 3 called them back` writes.

use tsk_core::vocab::NON_RESOLVED_STATUSES;
use tsk_core::{CmdLine, GitRepo, TaskStore};

use super::{commit_message, save_and_commit, tasks_for_ids, CommandContext, Result};

/// Executes the note command.
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
    let tasks = tasks_for_ids(&set, cmd_line)?;

    let text = note_text(cmd_line);
    if text.is_empty() {
        for task in &tasks {
            println!("{task}");
            if task.notes.is_empty() {
                println!("  (no notes)");
            } else {
                for line in task.notes.lines() {
                    println!("  {line}");
                }
            }
        }
        return Ok(());
    }

    for mut task in tasks {
        task.append_note(&text);
        let line = task.to_string();
        set.upsert_task(task)?;
        println!("Noted: {line}");
    }

    save_and_commit(ctx, store, repo, &mut set, &commit_message("note", cmd_line))
}

/// The note line to append: the free text, with any `/`-suffixed note
/// text tacked on. `tsk note 3 fixed / see ticket` is one line.
fn note_text(cmd_line: &CmdLine) -> String {
    match (cmd_line.text.is_empty(), cmd_line.note.is_empty()) {
        (false, false) => format!("{} {}", cmd_line.text, cmd_line.note),
        (false, true) => cmd_line.text.clone(),
        (true, false) => cmd_line.note.clone(),
        (true, true) => String::new(),
    }
}
