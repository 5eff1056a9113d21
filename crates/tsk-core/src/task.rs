//! The task record: canonicalisation, validation and filter matching.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::{Uuid, Version};

use crate::query::CmdLine;
use crate::vocab::{
    is_valid_priority, is_valid_status, NOTE_MODE_KEYWORD, PRIORITY_NORMAL, STATUS_RESOLVED,
};

/// A single entry in a task's checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubTask {
    pub summary: String,
    pub resolved: bool,
}

/// A single tracked task.
///
/// Identity and lifecycle fields are carried by where the task sits on
/// disk, not by its file: `uuid` comes from the filename, `status` from
/// the containing directory and `write_pending` only ever lives in
/// memory. The serialized form therefore never includes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Stable identity, a version 4 UUID. Derived from the filename.
    #[serde(skip)]
    pub uuid: String,
    /// Lifecycle state. Derived from the containing directory.
    #[serde(skip)]
    pub status: String,
    /// Set when the in-memory task differs from what is on disk.
    #[serde(skip)]
    pub write_pending: bool,

    /// Short reference number. Ephemeral: assigned to non-resolved tasks
    /// on load and dropped again on resolution.
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,

    /// One-line description.
    pub summary: String,
    /// Newline-separated note lines, oldest first.
    pub notes: String,
    /// Lowercased labels, kept sorted and unique by [`Task::normalise`].
    pub tags: Vec<String>,
    /// Lowercased project name; empty means unfiled.
    pub project: String,
    /// Priority token `P0`..`P3`; [`Task::normalise`] fills in the default.
    pub priority: String,
    /// Who a delegated task was handed to.
    pub delegated_to: String,
    /// Checklist under this task.
    pub subtasks: Vec<SubTask>,
    /// UUIDs of tasks that must resolve before this one.
    pub dependencies: Vec<String>,

    pub created: Option<DateTime<Utc>>,
    pub resolved: Option<DateTime<Utc>>,
    pub due: Option<DateTime<Utc>>,

    /// Recurrence rule for recurring tasks.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schedule: String,
    /// UUID of the recurring task this one was spawned from.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent: String,
}

fn is_zero(id: &i64) -> bool {
    *id == 0
}

/// Why a task failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// The task's own UUID is not a version 4 UUID.
    #[error("invalid UUID '{0}': expected a version 4 UUID")]
    InvalidUuid(String),
    /// The status is not one of the recognised statuses.
    #[error("invalid status '{0}'")]
    InvalidStatus(String),
    /// The priority is not one of the recognised priority tokens.
    #[error("invalid priority '{0}'")]
    InvalidPriority(String),
    /// A dependency entry is not a version 4 UUID.
    #[error("invalid dependency '{0}': expected a version 4 UUID")]
    InvalidDependency(String),
}

impl TaskError {
    /// Creates an invalid UUID error.
    pub fn invalid_uuid(uuid: impl Into<String>) -> Self {
        Self::InvalidUuid(uuid.into())
    }

    /// Creates an invalid status error.
    pub fn invalid_status(status: impl Into<String>) -> Self {
        Self::InvalidStatus(status.into())
    }

    /// Creates an invalid priority error.
    pub fn invalid_priority(priority: impl Into<String>) -> Self {
        Self::InvalidPriority(priority.into())
    }

    /// Creates an invalid dependency error.
    pub fn invalid_dependency(uuid: impl Into<String>) -> Self {
        Self::InvalidDependency(uuid.into())
    }
}

/// Whether `value` parses as a version 4 UUID.
///
/// Any textual form the `uuid` crate accepts will do; generated UUIDs are
/// always the lowercase hyphenated form.
pub fn is_valid_uuid4(value: &str) -> bool {
    Uuid::parse_str(value).is_ok_and(|uuid| uuid.get_version() == Some(Version::Random))
}

impl Task {
    /// Brings the task to canonical form. Idempotent.
    ///
    /// Lowercases the project, lowercases/sorts/dedups the tags, drops the
    /// short ID of resolved tasks and fills in the default priority.
    pub fn normalise(&mut self) {
        self.project = self.project.to_lowercase();
        for tag in &mut self.tags {
            *tag = tag.to_lowercase();
        }
        self.tags.sort();
        self.tags.dedup();
        if self.status == STATUS_RESOLVED {
            self.id = 0;
        }
        if self.priority.is_empty() {
            self.priority = PRIORITY_NORMAL.to_string();
        }
    }

    /// Checks the task against the recognised vocabulary without changing
    /// it. Callers normalise first and must not persist a task that fails.
    ///
    /// # Errors
    ///
    /// Returns the first failure found, checking the task's UUID, then its
    /// status, then its priority, then each dependency in turn.
    pub fn validate(&self) -> Result<(), TaskError> {
        if !is_valid_uuid4(&self.uuid) {
            return Err(TaskError::invalid_uuid(&self.uuid));
        }
        if !is_valid_status(&self.status) {
            return Err(TaskError::invalid_status(&self.status));
        }
        if !is_valid_priority(&self.priority) {
            return Err(TaskError::invalid_priority(&self.priority));
        }
        for dependency in &self.dependencies {
            if !is_valid_uuid4(dependency) {
                return Err(TaskError::invalid_dependency(dependency));
            }
        }
        Ok(())
    }

    /// Whether the task matches `cmd_line`'s query.
    ///
    /// IDs override everything: when the query carries IDs, membership in
    /// that list alone decides the match. Otherwise every required tag
    /// must be present, no excluded tag or project may be, project and
    /// priority must equal the query's when set, and the free text must
    /// occur case-insensitively in the summary or notes. An empty query
    /// matches every task.
    pub fn matches_filter(&self, cmd_line: &CmdLine) -> bool {
        for id in &cmd_line.ids {
            if *id == self.id {
                return true;
            }
        }
        if !cmd_line.ids.is_empty() {
            return false;
        }

        for tag in &cmd_line.tags {
            if !self.tags.contains(tag) {
                return false;
            }
        }
        for tag in &cmd_line.anti_tags {
            if self.tags.contains(tag) {
                return false;
            }
        }
        if cmd_line.anti_projects.contains(&self.project) {
            return false;
        }
        if let Some(project) = &cmd_line.project {
            if self.project != *project {
                return false;
            }
        }
        if let Some(priority) = &cmd_line.priority {
            if self.priority != *priority {
                return false;
            }
        }
        if !cmd_line.text.is_empty() {
            let haystack = format!("{}{}", self.summary, self.notes).to_lowercase();
            if !haystack.contains(&cmd_line.text.to_lowercase()) {
                return false;
            }
        }
        true
    }

    /// The summary, extended with the latest note line when there is one.
    pub fn long_summary(&self) -> String {
        let last_note = self.last_note_line();
        if last_note.is_empty() {
            self.summary.clone()
        } else {
            format!("{} {} {}", self.summary, NOTE_MODE_KEYWORD, last_note)
        }
    }

    /// Appends one line to the task's notes.
    pub fn append_note(&mut self, text: &str) {
        if !self.notes.is_empty() {
            self.notes.push('\n');
        }
        self.notes.push_str(text);
    }

    fn last_note_line(&self) -> &str {
        self.notes.rsplit('\n').next().unwrap_or("")
    }
}

impl fmt::Display for Task {
    /// `id: summary` for tasks that have an ID, bare summary otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.id > 0 {
            write!(f, "{}: {}", self.id, self.summary)
        } else {
            write!(f, "{}", self.summary)
        }
    }
}
