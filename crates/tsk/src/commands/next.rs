//! Next command implementation: the default listing.
//!
//! Shows the open tasks matching the query, most urgent first, capped so
//! the list fits on a screen. When nothing matches and the query looks
//! like a mistyped command word, suggests the likely command instead.

use tsk_core::vocab::{ALL_CMDS, NON_RESOLVED_STATUSES};
use tsk_core::{CmdLine, TaskStore};

use super::{CommandContext, Result};
use crate::output::{format_context_banner, format_tasks_table};

/// Rows shown before the listing is cut off. `show-open` has no cap.
const NEXT_LIMIT: usize = 25;

/// How far a word may be from a command name and still count as a typo.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Executes the next command.
///
/// # Errors
///
/// Returns an error if the task repository cannot be read.
pub fn execute(
    ctx: &CommandContext,
    store: &TaskStore,
    cmd_line: &CmdLine,
    context: &CmdLine,
) -> Result<()> {
    let set = store.load_task_set(NON_RESOLVED_STATUSES)?;
    let matched = set.filter(cmd_line);

    if !cmd_line.ignore_context {
        if let Some(banner) = format_context_banner(context, ctx.use_colors) {
            println!("{banner}");
        }
    }

    if matched.is_empty() {
        if let Some(suggestion) = suggest_command(&cmd_line.text) {
            println!("No matching tasks. Did you mean `tsk {suggestion}`?");
            return Ok(());
        }
    }

    print!(
        "{}",
        format_tasks_table(&matched, ctx.use_colors, Some(NEXT_LIMIT))
    );
    Ok(())
}

/// The command name closest to the first free-text word, if any is close
/// enough to look like a typo.
fn suggest_command(text: &str) -> Option<&'static str> {
    let word = text.split_whitespace().next()?.to_lowercase();
    ALL_CMDS
        .iter()
        .map(|cmd| (strsim::levenshtein(&word, cmd), *cmd))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, cmd)| cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_command_catches_typos() {
        assert_eq!(suggest_command("reslove"), Some("resolve"));
        assert_eq!(suggest_command("ad"), Some("add"));
    }

    #[test]
    fn test_suggest_command_uses_the_first_word_only() {
        assert_eq!(suggest_command("reslove the thing"), Some("resolve"));
    }

    #[test]
    fn test_suggest_command_gives_up_on_distant_words() {
        assert_eq!(suggest_command("quarterly report"), None);
    }

    #[test]
    fn test_suggest_command_ignores_empty_text() {
        assert_eq!(suggest_command(""), None);
        assert_eq!(suggest_command("   "), None);
    }
}
