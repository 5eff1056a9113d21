//! Modify command implementation.
//!
//! Applies the command line's attribute tokens to the ID-selected tasks:
//! `+tag` adds, `-tag` removes, `project:` refiles, `-project:` unfiles a
//! matching project and a priority token reprioritises. IDs are required;
//! modifying whatever a loose filter happens to hit is too easy to do by
//! accident.

use tsk_core::vocab::NON_RESOLVED_STATUSES;
use tsk_core::{CmdLine, GitRepo, Task, TaskStore};

use super::{commit_message, save_and_commit, tasks_for_ids, CommandContext, CommandError, Result};

/// Executes the modify command.
///
/// # Errors
///
/// Returns a usage error when no IDs or no attributes are given, and
/// storage or git errors from persisting the change.
pub fn execute(
    ctx: &CommandContext,
    store: &TaskStore,
    repo: &GitRepo,
    cmd_line: &CmdLine,
) -> Result<()> {
    if !has_modifications(cmd_line) {
        return Err(CommandError::Usage(
            "modify needs at least one attribute: +tag, -tag, project:, -project: or a priority"
                .to_string(),
        ));
    }

    let mut set = store.load_task_set(NON_RESOLVED_STATUSES)?;

    for mut task in tasks_for_ids(&set, cmd_line)? {
        apply(&mut task, cmd_line);
        let line = task.to_string();
        set.upsert_task(task)?;
        println!("Modified: {line}");
    }

    save_and_commit(
        ctx,
        store,
        repo,
        &mut set,
        &commit_message("modify", cmd_line),
    )
}

fn has_modifications(cmd_line: &CmdLine) -> bool {
    !cmd_line.tags.is_empty()
        || !cmd_line.anti_tags.is_empty()
        || cmd_line.project.is_some()
        || !cmd_line.anti_projects.is_empty()
        || cmd_line.priority.is_some()
}

/// Applies the attribute edits. Normalisation on the way back into the
/// set re-sorts and dedups whatever this leaves behind.
fn apply(task: &mut Task, cmd_line: &CmdLine) {
    for tag in &cmd_line.tags {
        if !task.tags.contains(tag) {
            task.tags.push(tag.clone());
        }
    }
    task.tags.retain(|tag| !cmd_line.anti_tags.contains(tag));

    if let Some(project) = &cmd_line.project {
        task.project = project.clone();
    }
    if cmd_line.anti_projects.contains(&task.project) {
        task.project.clear();
    }

    if let Some(priority) = &cmd_line.priority {
        task.priority = priority.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsk_core::parse_cmd_line;

    fn sample_task() -> Task {
        Task {
            summary: "fix the thing".to_string(),
            tags: vec!["dns".to_string(), "work".to_string()],
            project: "acme".to_string(),
            priority: "P2".to_string(),
            ..Task::default()
        }
    }

    #[test]
    fn test_apply_adds_and_removes_tags() {
        let mut task = sample_task();
        apply(&mut task, &parse_cmd_line(["modify", "3", "+urgent", "-dns"]));
        assert_eq!(task.tags, vec!["work", "urgent"]);
    }

    #[test]
    fn test_apply_does_not_duplicate_existing_tags() {
        let mut task = sample_task();
        apply(&mut task, &parse_cmd_line(["modify", "3", "+work"]));
        assert_eq!(task.tags, vec!["dns", "work"]);
    }

    #[test]
    fn test_apply_refiles_the_project() {
        let mut task = sample_task();
        apply(&mut task, &parse_cmd_line(["modify", "3", "project:beta"]));
        assert_eq!(task.project, "beta");
    }

    #[test]
    fn test_apply_unfiles_a_matching_anti_project() {
        let mut task = sample_task();
        apply(&mut task, &parse_cmd_line(["modify", "3", "-project:acme"]));
        assert_eq!(task.project, "");
    }

    #[test]
    fn test_apply_leaves_other_projects_alone() {
        let mut task = sample_task();
        apply(&mut task, &parse_cmd_line(["modify", "3", "-project:beta"]));
        assert_eq!(task.project, "acme");
    }

    #[test]
    fn test_apply_sets_the_priority() {
        let mut task = sample_task();
        apply(&mut task, &parse_cmd_line(["modify", "3", "P0"]));
        assert_eq!(task.priority, "P0");
    }

    #[test]
    fn test_has_modifications_requires_an_attribute() {
        assert!(!has_modifications(&parse_cmd_line(["modify", "3"])));
        assert!(!has_modifications(&parse_cmd_line([
            "modify", "3", "loose", "text"
        ])));
        assert!(has_modifications(&parse_cmd_line(["modify", "3", "+tag"])));
        assert!(has_modifications(&parse_cmd_line(["modify", "3", "P1"])));
    }
}
