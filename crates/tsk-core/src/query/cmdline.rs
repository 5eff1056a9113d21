//! The parsed form of a command line and its canonical rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fully classified command line.
///
/// Produced by [`parse_cmd_line`](super::parse_cmd_line); also the persisted
/// shape of the standing context, which is a `CmdLine` with no command.
///
/// All attribute fields hold lowercased, sigil-stripped values. `text` and
/// `note` keep the original casing of their words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CmdLine {
    /// Recognised command word, lowercased. `None` means the driver picks
    /// the default listing command.
    pub cmd: Option<String>,
    /// Task IDs, in the order given.
    pub ids: Vec<i64>,
    /// Tags the query requires. All must be present on a matching task.
    pub tags: Vec<String>,
    /// Tags the query excludes. None may be present on a matching task.
    pub anti_tags: Vec<String>,
    /// Project the query selects, or that a created task is filed under.
    pub project: Option<String>,
    /// Projects the query excludes.
    pub anti_projects: Vec<String>,
    /// Priority token, exactly as written (`P0`..`P3`).
    pub priority: Option<String>,
    /// Free text: summary for creation commands, substring query for
    /// filtering commands.
    pub text: String,
    /// Note text collected after the `/` keyword.
    pub note: String,
    /// Reserved for scheduling syntax; only ever set programmatically.
    pub schedule: Option<String>,
    /// Set by the `--` keyword: do not merge the standing context.
    pub ignore_context: bool,
    /// Whether classification moved past the leading command/ID phase.
    /// `false` means every token so far was a command word or an integer.
    pub ids_exhausted: bool,
}

impl CmdLine {
    /// Whether the query part is empty, ignoring the command word.
    ///
    /// An empty query matches every task; an empty context filters nothing.
    pub fn is_unfiltered(&self) -> bool {
        self.ids.is_empty()
            && self.tags.is_empty()
            && self.anti_tags.is_empty()
            && self.project.is_none()
            && self.anti_projects.is_empty()
            && self.priority.is_none()
            && self.text.is_empty()
            && self.schedule.is_none()
    }
}

impl fmt::Display for CmdLine {
    /// Renders the attributes back into argument form.
    ///
    /// The rendering is lossy: the command word, note text, the ignore
    /// keyword and original token order are all dropped, and free text
    /// comes back quoted. Suitable for banners and commit messages, not
    /// for re-parsing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut args: Vec<String> = Vec::new();
        for id in &self.ids {
            args.push(id.to_string());
        }
        for tag in &self.tags {
            args.push(format!("+{tag}"));
        }
        for tag in &self.anti_tags {
            args.push(format!("-{tag}"));
        }
        if let Some(project) = &self.project {
            args.push(format!("project:{project}"));
        }
        for project in &self.anti_projects {
            args.push(format!("-project:{project}"));
        }
        if let Some(priority) = &self.priority {
            args.push(priority.clone());
        }
        if !self.text.is_empty() {
            args.push(format!("\"{}\"", self.text));
        }
        if let Some(schedule) = &self.schedule {
            args.push(format!("\"{schedule}\""));
        }
        write!(f, "{}", args.join(" "))
    }
}
