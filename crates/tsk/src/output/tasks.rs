//! Task listing output.

use owo_colors::OwoColorize;

use tsk_core::vocab::{STATUS_ACTIVE, STATUS_PAUSED};
use tsk_core::{CmdLine, Task};

use super::helpers::{format_priority_cell, truncate_str};

/// Formats the standard task listing table.
///
/// `limit` caps the number of rows; a footer says how many were held
/// back. Rows are rendered in the order given, so callers pass tasks
/// already sorted by urgency.
pub fn format_tasks_table(tasks: &[&Task], use_colors: bool, limit: Option<usize>) -> String {
    if tasks.is_empty() {
        return "No tasks found.\n".to_string();
    }

    let mut output = String::new();

    // Header
    let header = format!(
        "{:<4} {:<4} {:<15} {:<12} {}",
        "ID", "Pri", "Tags", "Project", "Summary"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    let shown = limit.unwrap_or(tasks.len()).min(tasks.len());
    for task in &tasks[..shown] {
        let id = if task.id > 0 {
            task.id.to_string()
        } else {
            "-".to_string()
        };
        let tags = truncate_str(&task.tags.join(" "), 15);
        let project = truncate_str(&task.project, 12);
        let summary = format_summary(task, use_colors);

        let line = format!(
            "{:<4} {} {:<15} {:<12} {}",
            id,
            format_priority_cell(&task.priority, use_colors),
            tags,
            project,
            summary
        );
        output.push_str(&line);
        output.push('\n');
    }

    if shown < tasks.len() {
        let footer = format!(
            "({} more; `tsk show-open` shows everything)",
            tasks.len() - shown
        );
        if use_colors {
            output.push_str(&format!("{}\n", footer.dimmed()));
        } else {
            output.push_str(&footer);
            output.push('\n');
        }
    }

    output
}

/// Formats the standing-context banner, when there is a context to show.
pub fn format_context_banner(context: &CmdLine, use_colors: bool) -> Option<String> {
    let rendered = context.to_string();
    if rendered.is_empty() {
        return None;
    }
    let banner = format!("Active context: {rendered}");
    if use_colors {
        Some(banner.yellow().to_string())
    } else {
        Some(banner)
    }
}

fn format_summary(task: &Task, use_colors: bool) -> String {
    let summary = task.long_summary();
    if !use_colors {
        return summary;
    }
    match task.status.as_str() {
        STATUS_ACTIVE => summary.green().to_string(),
        STATUS_PAUSED => summary.dimmed().to_string(),
        _ => summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsk_core::parse_cmd_line;
    use tsk_core::vocab::STATUS_PENDING;

    fn listed_task(id: i64, summary: &str) -> Task {
        Task {
            id,
            summary: summary.to_string(),
            status: STATUS_PENDING.to_string(),
            priority: "P2".to_string(),
            tags: vec!["work".to_string()],
            project: "acme".to_string(),
            ..Task::default()
        }
    }

    #[test]
    fn test_empty_table_says_so() {
        assert_eq!(format_tasks_table(&[], false, None), "No tasks found.\n");
    }

    #[test]
    fn test_table_contains_task_fields() {
        let task = listed_task(3, "fix the thing");
        let output = format_tasks_table(&[&task], false, None);
        assert!(output.starts_with("ID"));
        assert!(output.contains("fix the thing"));
        assert!(output.contains("work"));
        assert!(output.contains("acme"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_table_limit_adds_footer() {
        let a = listed_task(1, "a");
        let b = listed_task(2, "b");
        let c = listed_task(3, "c");
        let output = format_tasks_table(&[&a, &b, &c], false, Some(2));
        assert!(output.contains("(1 more"));
        assert!(!output.contains(" c\n"));
    }

    #[test]
    fn test_id_less_tasks_show_a_dash()  {
        let task = listed_task(0, "resolved thing");
        let output = format_tasks_table(&[&task], false, None);
        assert!(output.lines().nth(1).unwrap().starts_with("-"));
    }

    #[test]
    fn test_context_banner_renders_the_context() {
        let context = parse_cmd_line(["+work", "project:acme"]);
        let banner = format_context_banner(&context, false).unwrap();
        assert_eq!(banner, "Active context: +work project:acme");
    }

    #[test]
    fn test_no_banner_for_empty_context() {
        assert!(format_context_banner(&CmdLine::default(), false).is_none());
    }
}
