//! Reserved vocabulary shared by the tokenizer, the task model and the CLI.
//!
//! Everything here is data: command names, task statuses, priority tokens
//! and the two keyword sigils. The classification rules that consume these
//! sets live in the `query` module.

/// Listing and default command.
pub const CMD_NEXT: &str = "next";
/// Creates a pending task.
pub const CMD_ADD: &str = "add";
/// Creates an already-resolved task, for work done outside the tracker.
pub const CMD_LOG: &str = "log";
/// Marks tasks active.
pub const CMD_START: &str = "start";
/// Marks tasks paused.
pub const CMD_STOP: &str = "stop";
/// Appends to a task's notes.
pub const CMD_NOTE: &str = "note";
/// Alias of [`CMD_NOTE`].
pub const CMD_NOTES: &str = "notes";
/// Marks tasks resolved.
pub const CMD_RESOLVE: &str = "resolve";
/// Alias of [`CMD_RESOLVE`].
pub const CMD_DONE: &str = "done";
/// Adjusts tags, project and priority of existing tasks.
pub const CMD_MODIFY: &str = "modify";
/// Opens a task in `$EDITOR`.
pub const CMD_EDIT: &str = "edit";
/// Deletes tasks outright.
pub const CMD_REMOVE: &str = "remove";
/// Alias of [`CMD_REMOVE`].
pub const CMD_RM: &str = "rm";
/// Shows, sets or clears the standing context.
pub const CMD_CONTEXT: &str = "context";
/// Pulls then pushes the task repository.
pub const CMD_SYNC: &str = "sync";
/// Reverts the last recorded change.
pub const CMD_UNDO: &str = "undo";
/// Runs a raw git command inside the task repository.
pub const CMD_GIT: &str = "git";

pub const CMD_SHOW_OPEN: &str = "show-open";
pub const CMD_SHOW_ACTIVE: &str = "show-active";
pub const CMD_SHOW_PAUSED: &str = "show-paused";
pub const CMD_SHOW_RESOLVED: &str = "show-resolved";
pub const CMD_SHOW_PROJECTS: &str = "show-projects";
pub const CMD_SHOW_TAGS: &str = "show-tags";
pub const CMD_SHOW_UNORGANISED: &str = "show-unorganised";

pub const CMD_HELP: &str = "help";
pub const CMD_VERSION: &str = "version";

/// Every recognised command word, in the order `tsk help` lists them.
///
/// The tokenizer only promotes a token to a command when it appears here;
/// anything else falls through to ID or attribute classification.
pub const ALL_CMDS: &[&str] = &[
    CMD_NEXT,
    CMD_ADD,
    CMD_LOG,
    CMD_START,
    CMD_STOP,
    CMD_NOTE,
    CMD_NOTES,
    CMD_RESOLVE,
    CMD_DONE,
    CMD_MODIFY,
    CMD_EDIT,
    CMD_REMOVE,
    CMD_RM,
    CMD_CONTEXT,
    CMD_SYNC,
    CMD_UNDO,
    CMD_GIT,
    CMD_SHOW_OPEN,
    CMD_SHOW_ACTIVE,
    CMD_SHOW_PAUSED,
    CMD_SHOW_RESOLVED,
    CMD_SHOW_PROJECTS,
    CMD_SHOW_TAGS,
    CMD_SHOW_UNORGANISED,
    CMD_HELP,
    CMD_VERSION,
];

/// Ready to be worked on.
pub const STATUS_PENDING: &str = "pending";
/// Currently being worked on.
pub const STATUS_ACTIVE: &str = "active";
/// Started but set aside.
pub const STATUS_PAUSED: &str = "paused";
/// Finished; resolved tasks lose their short ID.
pub const STATUS_RESOLVED: &str = "resolved";
/// Handed to somebody else.
pub const STATUS_DELEGATED: &str = "delegated";
/// Intentionally postponed.
pub const STATUS_DEFERRED: &str = "deferred";
/// Spawns copies of itself on a schedule.
pub const STATUS_RECURRING: &str = "recurring";

/// Every valid status, in canonical display order.
pub const ALL_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_ACTIVE,
    STATUS_PAUSED,
    STATUS_RESOLVED,
    STATUS_DELEGATED,
    STATUS_DEFERRED,
    STATUS_RECURRING,
];

/// Statuses a short ID can refer to.
///
/// Commands that accept IDs must load exactly this set, so that the same
/// numeral names the same task from one invocation to the next.
pub const NON_RESOLVED_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_ACTIVE,
    STATUS_PAUSED,
    STATUS_DELEGATED,
    STATUS_DEFERRED,
    STATUS_RECURRING,
];

/// Critical.
pub const PRIORITY_CRITICAL: &str = "P0";
/// High.
pub const PRIORITY_HIGH: &str = "P1";
/// Normal; the default applied by normalisation.
pub const PRIORITY_NORMAL: &str = "P2";
/// Low.
pub const PRIORITY_LOW: &str = "P3";

/// Every valid priority, most urgent first. Sorting on the raw token gives
/// the same order.
pub const ALL_PRIORITIES: &[&str] = &[
    PRIORITY_CRITICAL,
    PRIORITY_HIGH,
    PRIORITY_NORMAL,
    PRIORITY_LOW,
];

/// Token that disables the standing context for one invocation.
pub const IGNORE_CONTEXT_KEYWORD: &str = "--";
/// Token that switches the remaining free text into note text.
pub const NOTE_MODE_KEYWORD: &str = "/";

/// Whether `word` is a recognised command. Expects the lowercased token.
pub fn is_valid_cmd(word: &str) -> bool {
    ALL_CMDS.contains(&word)
}

/// Whether `status` is one of the recognised task statuses.
pub fn is_valid_status(status: &str) -> bool {
    ALL_STATUSES.contains(&status)
}

/// Whether `token` is a priority, exactly as written.
///
/// Matching is case sensitive: `p1` stays free text, only `P1` is a
/// priority.
pub fn is_valid_priority(token: &str) -> bool {
    ALL_PRIORITIES.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_matching_is_case_sensitive() {
        assert!(is_valid_priority("P0"));
        assert!(is_valid_priority("P3"));
        assert!(!is_valid_priority("p1"));
        assert!(!is_valid_priority("P4"));
        assert!(!is_valid_priority(""));
    }

    #[test]
    fn test_priority_tokens_sort_most_urgent_first() {
        let mut sorted = ALL_PRIORITIES.to_vec();
        sorted.sort();
        assert_eq!(sorted, ALL_PRIORITIES);
    }

    #[test]
    fn test_non_resolved_statuses_excludes_only_resolved() {
        assert!(!NON_RESOLVED_STATUSES.contains(&STATUS_RESOLVED));
        for status in ALL_STATUSES {
            if *status != STATUS_RESOLVED {
                assert!(NON_RESOLVED_STATUSES.contains(status));
            }
        }
    }

    #[test]
    fn test_command_words_are_recognised() {
        assert!(is_valid_cmd("next"));
        assert!(is_valid_cmd("show-unorganised"));
        assert!(!is_valid_cmd("Next"));
        assert!(!is_valid_cmd("frobnicate"));
    }
}
