//! Context command implementation.
//!
//! Shows, sets or clears the standing context: `tsk context` prints it,
//! `tsk context none` clears it and anything else becomes the new
//! context. The context is per clone, stored next to the git metadata,
//! so two machines sharing a repository can stand in different contexts.

use tsk_core::{CmdLine, State, TaskStore};

use super::{CommandContext, CommandError, Result};
use crate::output::format_context_banner;

/// The word that clears the context.
const CLEAR_KEYWORD: &str = "none";

/// Executes the context command.
///
/// # Errors
///
/// Returns a usage error when the new context carries task IDs, and
/// storage errors from persisting the state file.
pub fn execute(
    ctx: &CommandContext,
    store: &TaskStore,
    cmd_line: &CmdLine,
    mut state: State,
) -> Result<()> {
    // Bare `tsk context` prints.
    if cmd_line.is_unfiltered() {
        match format_context_banner(&state.context, ctx.use_colors) {
            Some(banner) => println!("{banner}"),
            None => println!("No context is set."),
        }
        return Ok(());
    }

    if cmd_line.text.eq_ignore_ascii_case(CLEAR_KEYWORD) {
        state.context = CmdLine::default();
        store.save_state(&state)?;
        println!("Context cleared.");
        return Ok(());
    }

    if !cmd_line.ids.is_empty() {
        return Err(CommandError::Usage(
            "a context cannot contain task IDs".to_string(),
        ));
    }

    state.context = context_from(cmd_line);
    store.save_state(&state)?;
    println!("Context set: {}", state.context);
    Ok(())
}

/// The persisted shape of the new context: the query attributes only.
///
/// The command word and the note/ignore flags describe this invocation,
/// not the standing filter, and are dropped.
fn context_from(cmd_line: &CmdLine) -> CmdLine {
    CmdLine {
        cmd: None,
        note: String::new(),
        ignore_context: false,
        ..cmd_line.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsk_core::parse_cmd_line;

    #[test]
    fn test_context_from_keeps_the_query_attributes() {
        let cmd_line = parse_cmd_line(["context", "+work", "-blocked", "project:acme"]);
        let context = context_from(&cmd_line);
        assert_eq!(context.tags, vec!["work"]);
        assert_eq!(context.anti_tags, vec!["blocked"]);
        assert_eq!(context.project.as_deref(), Some("acme"));
        assert!(context.cmd.is_none());
    }

    #[test]
    fn test_context_from_drops_invocation_only_fields() {
        let cmd_line = parse_cmd_line(["context", "+work", "/", "scratch", "note"]);
        let context = context_from(&cmd_line);
        assert!(context.note.is_empty());
        assert!(!context.ignore_context);
    }

    #[test]
    fn test_round_trip_through_the_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::with_root(dir.path());
        // The state file sits under .git/, which save_state creates.
        let state = State {
            context: parse_cmd_line(["+work", "project:acme"]),
        };
        store.save_state(&state).unwrap();
        let loaded = store.load_state().unwrap();
        assert_eq!(loaded.context.to_string(), "+work project:acme");
    }
}
