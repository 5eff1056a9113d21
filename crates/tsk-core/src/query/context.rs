//! Merging the standing context into a command line.

use thiserror::Error;

use super::cmdline::CmdLine;

/// An irreconcilable difference between a command line and the standing
/// context.
///
/// The tokenizer itself never fails; this is the query layer's only error.
/// The merge stays a pure function and the CLI driver decides how fatal a
/// conflict is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextConflict {
    /// The command line names one project, the context another.
    #[error("project '{command}' conflicts with context project '{context}'")]
    Project { command: String, context: String },
    /// The command line already carries a priority and the context sets one
    /// too. Reported even when the two are equal, so a context that pins a
    /// priority keeps sole ownership of it.
    #[error("priority {command} conflicts with context priority {context}")]
    Priority { command: String, context: String },
}

impl ContextConflict {
    /// Creates a project conflict.
    pub fn project(command: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Project {
            command: command.into(),
            context: context.into(),
        }
    }

    /// Creates a priority conflict.
    pub fn priority(command: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Priority {
            command: command.into(),
            context: context.into(),
        }
    }
}

impl CmdLine {
    /// Folds the standing `context` into this command line.
    ///
    /// Tags and anti-tags are unioned, keeping this command line's order
    /// and appending only what it lacks. Project and priority are
    /// exclusive: the context supplies them when absent, and a project
    /// disagreement or any doubled priority is a [`ContextConflict`].
    ///
    /// On error the command line is left partially merged and should be
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ContextConflict::Project`] when both sides name different
    /// projects, and [`ContextConflict::Priority`] when both sides carry a
    /// priority.
    pub fn merge_context(&mut self, context: &CmdLine) -> Result<(), ContextConflict> {
        for tag in &context.tags {
            if !self.tags.contains(tag) {
                self.tags.push(tag.clone());
            }
        }
        for tag in &context.anti_tags {
            if !self.anti_tags.contains(tag) {
                self.anti_tags.push(tag.clone());
            }
        }

        if let Some(context_project) = &context.project {
            match &self.project {
                Some(project) if project != context_project => {
                    return Err(ContextConflict::project(project, context_project));
                }
                _ => self.project = Some(context_project.clone()),
            }
        }

        if let Some(context_priority) = &context.priority {
            if let Some(priority) = &self.priority {
                return Err(ContextConflict::priority(priority, context_priority));
            }
            self.priority = Some(context_priority.clone());
        }

        Ok(())
    }
}
