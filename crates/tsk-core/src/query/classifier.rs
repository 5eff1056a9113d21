//! Token classification.
//!
//! Classification runs in two phases. A leading phase recognises the
//! command word and collects integer IDs; it ends at the first token that
//! is neither, and never restarts. After that, every token runs through
//! [`CLASSIFIERS`] in order and the first rule that consumes it wins.

use crate::vocab::{is_valid_cmd, is_valid_priority, IGNORE_CONTEXT_KEYWORD, NOTE_MODE_KEYWORD};

use super::cmdline::CmdLine;

const PROJECT_PREFIX: &str = "project:";
const POSITIVE_PROJECT_PREFIX: &str = "+project:";
const NEGATIVE_PROJECT_PREFIX: &str = "-project:";

/// Tag sigils only count on tokens longer than this, so the bare sigils
/// and one-letter oddities like `+a` stay free text.
const MIN_SIGIL_TOKEN_LEN: usize = 3;

/// Accumulates classified tokens; folded into a [`CmdLine`] at the end.
#[derive(Default)]
struct ParseState {
    cmd: Option<String>,
    ids: Vec<i64>,
    tags: Vec<String>,
    anti_tags: Vec<String>,
    project: Option<String>,
    anti_projects: Vec<String>,
    priority: Option<String>,
    words: Vec<String>,
    note_words: Vec<String>,
    note_mode: bool,
    ignore_context: bool,
    ids_exhausted: bool,
}

/// One classification rule. Gets the raw token and its lowercased form;
/// returns `true` when it consumed the token.
type TokenClassifier = fn(&mut ParseState, &str, &str) -> bool;

/// The attribute rules, in precedence order.
///
/// Order is the contract: project prefixes must run before the bare tag
/// sigils that they start with, and the free-text rule consumes anything
/// left, so it stays last.
const CLASSIFIERS: &[TokenClassifier] = &[
    classify_project,
    classify_anti_project,
    classify_tag,
    classify_anti_tag,
    classify_priority,
    classify_ignore_context,
    classify_note_keyword,
    classify_text,
];

/// Classifies `args` into a [`CmdLine`].
///
/// Classification never fails; a token that fits no attribute shape is
/// free text. Pass the arguments exactly as received, without the program
/// name.
///
/// # Example
///
/// ```
/// use tsk_core::query::parse_cmd_line;
///
/// let cmd_line = parse_cmd_line(["add", "+home", "project:garden", "water", "the", "roses"]);
/// assert_eq!(cmd_line.cmd.as_deref(), Some("add"));
/// assert_eq!(cmd_line.tags, vec!["home"]);
/// assert_eq!(cmd_line.project.as_deref(), Some("garden"));
/// assert_eq!(cmd_line.text, "water the roses");
/// ```
pub fn parse_cmd_line<I, S>(args: I) -> CmdLine
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ParseState::default();

    for arg in args {
        let token = arg.as_ref();
        let lower = token.to_lowercase();

        if !state.ids_exhausted && state.cmd.is_none() && is_valid_cmd(&lower) {
            state.cmd = Some(lower);
            continue;
        }

        if !state.ids_exhausted {
            if let Ok(id) = token.parse::<i64>() {
                state.ids.push(id);
                continue;
            }
        }

        // First non-command, non-integer token; IDs are closed for good.
        state.ids_exhausted = true;

        for classify in CLASSIFIERS {
            if classify(&mut state, token, &lower) {
                break;
            }
        }
    }

    state.into_cmd_line()
}

impl ParseState {
    fn into_cmd_line(self) -> CmdLine {
        CmdLine {
            cmd: self.cmd,
            ids: self.ids,
            tags: self.tags,
            anti_tags: self.anti_tags,
            project: self.project,
            anti_projects: self.anti_projects,
            priority: self.priority,
            text: self.words.join(" "),
            note: self.note_words.join(" "),
            schedule: None,
            ignore_context: self.ignore_context,
            ids_exhausted: self.ids_exhausted,
        }
    }
}

fn classify_project(state: &mut ParseState, _token: &str, lower: &str) -> bool {
    let name = lower
        .strip_prefix(PROJECT_PREFIX)
        .or_else(|| lower.strip_prefix(POSITIVE_PROJECT_PREFIX));
    let Some(name) = name else {
        return false;
    };
    // A later project token always wins; an empty name unsets it.
    state.project = if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    };
    true
}

fn classify_anti_project(state: &mut ParseState, _token: &str, lower: &str) -> bool {
    let Some(name) = lower.strip_prefix(NEGATIVE_PROJECT_PREFIX) else {
        return false;
    };
    state.anti_projects.push(name.to_string());
    true
}

fn classify_tag(state: &mut ParseState, token: &str, lower: &str) -> bool {
    if token.len() < MIN_SIGIL_TOKEN_LEN || !lower.starts_with('+') {
        return false;
    }
    state.tags.push(lower[1..].to_string());
    true
}

fn classify_anti_tag(state: &mut ParseState, token: &str, lower: &str) -> bool {
    if token.len() < MIN_SIGIL_TOKEN_LEN || !lower.starts_with('-') {
        return false;
    }
    state.anti_tags.push(lower[1..].to_string());
    true
}

fn classify_priority(state: &mut ParseState, token: &str, _lower: &str) -> bool {
    if !is_valid_priority(token) {
        return false;
    }
    state.priority = Some(token.to_string());
    true
}

fn classify_ignore_context(state: &mut ParseState, token: &str, _lower: &str) -> bool {
    if token != IGNORE_CONTEXT_KEYWORD {
        return false;
    }
    state.ignore_context = true;
    true
}

fn classify_note_keyword(state: &mut ParseState, token: &str, _lower: &str) -> bool {
    if token != NOTE_MODE_KEYWORD {
        return false;
    }
    state.note_mode = true;
    true
}

fn classify_text(state: &mut ParseState, token: &str, _lower: &str) -> bool {
    if state.note_mode {
        state.note_words.push(token.to_string());
    } else {
        state.words.push(token.to_string());
    }
    true
}
