//! Show command implementations.
//!
//! One module for the whole `show-*` family: the status listings, the
//! project and tag summaries and the unorganised-task report. They differ
//! only in which statuses they load and how the result is rendered.

use tsk_core::vocab::{
    ALL_STATUSES, CMD_SHOW_ACTIVE, CMD_SHOW_PAUSED, CMD_SHOW_PROJECTS, CMD_SHOW_RESOLVED,
    CMD_SHOW_TAGS, CMD_SHOW_UNORGANISED, NON_RESOLVED_STATUSES, STATUS_ACTIVE, STATUS_PAUSED,
    STATUS_RESOLVED,
};
use tsk_core::{CmdLine, TaskStore};

use super::{CommandContext, Result};
use crate::output::{
    format_context_banner, format_projects_table, format_tags_list, format_tasks_table,
};

/// Executes one of the `show-*` commands.
///
/// # Errors
///
/// Returns an error if the task repository cannot be read.
pub fn execute(
    ctx: &CommandContext,
    store: &TaskStore,
    cmd: &str,
    cmd_line: &CmdLine,
    context: &CmdLine,
) -> Result<()> {
    match cmd {
        CMD_SHOW_PROJECTS => {
            let set = store.load_task_set(ALL_STATUSES)?;
            print!("{}", format_projects_table(&set.projects(), ctx.use_colors));
        }
        CMD_SHOW_TAGS => {
            let set = store.load_task_set(NON_RESOLVED_STATUSES)?;
            print!("{}", format_tags_list(&set.all_tags()));
        }
        CMD_SHOW_UNORGANISED => {
            let set = store.load_task_set(NON_RESOLVED_STATUSES)?;
            print!(
                "{}",
                format_tasks_table(&set.unorganised(), ctx.use_colors, None)
            );
        }
        CMD_SHOW_RESOLVED => {
            let set = store.load_task_set(&[STATUS_RESOLVED])?;
            print_filtered(ctx, cmd_line, context, set.filter(cmd_line));
        }
        status_listing => {
            // show-open, show-active, show-paused: same load, different
            // status cut. Non-resolved statuses are loaded wholesale so ID
            // assignment stays consistent with every other command.
            let set = store.load_task_set(NON_RESOLVED_STATUSES)?;
            let mut matched = set.filter(cmd_line);
            if let Some(status) = status_cut(status_listing) {
                matched.retain(|task| task.status == status);
            }
            print_filtered(ctx, cmd_line, context, matched);
        }
    }
    Ok(())
}

fn print_filtered(
    ctx: &CommandContext,
    cmd_line: &CmdLine,
    context: &CmdLine,
    matched: Vec<&tsk_core::Task>,
) {
    if !cmd_line.ignore_context {
        if let Some(banner) = format_context_banner(context, ctx.use_colors) {
            println!("{banner}");
        }
    }
    print!("{}", format_tasks_table(&matched, ctx.use_colors, None));
}

/// The single status a listing command narrows to, if it does.
fn status_cut(cmd: &str) -> Option<&'static str> {
    match cmd {
        CMD_SHOW_ACTIVE => Some(STATUS_ACTIVE),
        CMD_SHOW_PAUSED => Some(STATUS_PAUSED),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsk_core::vocab::CMD_SHOW_OPEN;

    #[test]
    fn test_status_cut_narrows_only_the_single_status_listings() {
        assert_eq!(status_cut(CMD_SHOW_ACTIVE), Some(STATUS_ACTIVE));
        assert_eq!(status_cut(CMD_SHOW_PAUSED), Some(STATUS_PAUSED));
        assert_eq!(status_cut(CMD_SHOW_OPEN), None);
    }
}
