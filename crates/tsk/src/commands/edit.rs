//! Edit command implementation.
//!
//! Round-trips each ID-selected task's YAML document through the user's
//! editor. The document is exactly what sits on disk, so anything the
//! store can parse can be written; identity and status stay outside the
//! document and cannot be edited here.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tsk_core::vocab::NON_RESOLVED_STATUSES;
use tsk_core::{CmdLine, GitRepo, Task, TaskStore};

use super::{commit_message, save_and_commit, tasks_for_ids, CommandContext, CommandError, Result};

/// Executes the edit command.
///
/// # Errors
///
/// Returns a usage error when no IDs are given, when the editor cannot be
/// started or exits non-zero, or when the edited document no longer
/// parses or validates.
pub fn execute(
    ctx: &CommandContext,
    store: &TaskStore,
    repo: &GitRepo,
    cmd_line: &CmdLine,
) -> Result<()> {
    let editor = editor_command();
    let mut set = store.load_task_set(NON_RESOLVED_STATUSES)?;

    for task in tasks_for_ids(&set, cmd_line)? {
        if ctx.verbose {
            eprintln!("opening task {} in {editor}", task.uuid);
        }
        let edited = edit_in_editor(&editor, task)?;
        let line = edited.to_string();
        set.upsert_task(edited)?;
        println!("Edited: {line}");
    }

    save_and_commit(ctx, store, repo, &mut set, &commit_message("edit", cmd_line))
}

/// The editor to run: `$EDITOR`, then `$VISUAL`, then `vi`.
fn editor_command() -> String {
    env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .unwrap_or_else(|_| "vi".to_string())
}

/// Writes the task's document to a scratch file, runs the editor on it
/// and parses the result back into the task.
fn edit_in_editor(editor: &str, task: Task) -> Result<Task> {
    let path = scratch_path(&task.uuid);
    let yaml = serde_yaml::to_string(&task)?;
    fs::write(&path, &yaml)?;

    // $EDITOR may carry arguments ("code --wait"); the first word is the
    // program.
    let mut words = editor.split_whitespace();
    let program = words.next().unwrap_or("vi");
    let status = Command::new(program)
        .args(words)
        .arg(&path)
        .status()
        .map_err(|e| CommandError::Usage(format!("failed to open editor '{editor}': {e}")))?;
    if !status.success() {
        let _ = fs::remove_file(&path);
        return Err(CommandError::Usage(format!(
            "editor '{editor}' exited with an error; task unchanged"
        )));
    }

    let edited_yaml = fs::read_to_string(&path)?;
    let _ = fs::remove_file(&path);

    let mut edited: Task = serde_yaml::from_str(&edited_yaml)?;
    edited.uuid = task.uuid;
    edited.status = task.status;
    Ok(edited)
}

fn scratch_path(uuid: &str) -> PathBuf {
    env::temp_dir().join(format!("tsk-edit-{uuid}.yml"))
}
