//! An in-memory collection of loaded tasks.
//!
//! A [`TaskSet`] holds whatever slice of the repository a command loaded,
//! hands out short IDs, and answers queries. It never touches disk; the
//! store loads and saves it.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::query::CmdLine;
use crate::task::{Task, TaskError};
use crate::vocab::{STATUS_ACTIVE, STATUS_PAUSED, STATUS_RESOLVED};

/// Per-project tallies across the loaded tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSummary {
    pub name: String,
    pub open: usize,
    pub resolved: usize,
}

/// The tasks a command operates on.
#[derive(Debug, Default)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from freshly loaded tasks.
    ///
    /// Tasks are normalised and brought into a stable order, then short
    /// IDs are repaired: a duplicate ID is taken away from the later
    /// task, and every non-resolved task without an ID gets the lowest
    /// free one. Repaired tasks are marked for writing.
    pub fn from_tasks(mut tasks: Vec<Task>) -> Self {
        // Directory iteration order is arbitrary; sort so that ID repair
        // always picks the same winners.
        tasks.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.uuid.cmp(&b.uuid)));

        let mut used: HashSet<i64> = HashSet::new();
        for task in &mut tasks {
            task.normalise();
            if task.id != 0 && !used.insert(task.id) {
                task.id = 0;
                task.write_pending = true;
            }
        }
        for task in &mut tasks {
            if task.id == 0 && task.status != STATUS_RESOLVED {
                let id = lowest_free_id(&used);
                used.insert(id);
                task.id = id;
                task.write_pending = true;
            }
        }

        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut [Task] {
        &mut self.tasks
    }

    pub fn task_by_id(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id && task.id != 0)
    }

    pub fn task_by_uuid(&self, uuid: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.uuid == uuid)
    }

    /// The lowest short ID not yet taken.
    pub fn next_free_id(&self) -> i64 {
        let used: HashSet<i64> = self.tasks.iter().map(|task| task.id).collect();
        lowest_free_id(&used)
    }

    /// Normalises, assigns an ID where due, validates and inserts `task`.
    ///
    /// Returns a reference to the stored task so callers can report what
    /// was created.
    ///
    /// # Errors
    ///
    /// Returns the [`TaskError`] of the first failed validation check; the
    /// set is unchanged in that case.
    pub fn add_task(&mut self, mut task: Task) -> Result<&Task, TaskError> {
        task.normalise();
        if task.id == 0 && task.status != STATUS_RESOLVED {
            task.id = self.next_free_id();
        }
        task.validate()?;
        task.write_pending = true;
        let index = self.tasks.len();
        self.tasks.push(task);
        Ok(&self.tasks[index])
    }

    /// Normalises, validates and stores `task`, replacing the task with
    /// the same UUID or inserting it if the set has none.
    ///
    /// # Errors
    ///
    /// Returns the [`TaskError`] of the first failed validation check; the
    /// set is unchanged in that case.
    pub fn upsert_task(&mut self, mut task: Task) -> Result<(), TaskError> {
        task.normalise();
        task.validate()?;
        task.write_pending = true;
        match self.tasks.iter_mut().find(|t| t.uuid == task.uuid) {
            Some(slot) => *slot = task,
            None => self.tasks.push(task),
        }
        Ok(())
    }

    /// Takes the task with `uuid` out of the set.
    pub fn remove_task(&mut self, uuid: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.uuid == uuid)?;
        Some(self.tasks.remove(index))
    }

    /// The tasks matching `cmd_line`, most urgent first.
    ///
    /// Sorted by status (active, then paused, then the rest), priority,
    /// creation time and ID, so listings are stable across invocations.
    pub fn filter(&self, cmd_line: &CmdLine) -> Vec<&Task> {
        let mut matched: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| task.matches_filter(cmd_line))
            .collect();
        matched.sort_by(|a, b| {
            status_rank(&a.status)
                .cmp(&status_rank(&b.status))
                .then_with(|| a.priority.cmp(&b.priority))
                .then_with(|| a.created.cmp(&b.created))
                .then_with(|| a.id.cmp(&b.id))
        });
        matched
    }

    /// Non-resolved tasks with neither a project nor tags.
    pub fn unorganised(&self) -> Vec<&Task> {
        let mut matched: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| {
                task.status != STATUS_RESOLVED && task.project.is_empty() && task.tags.is_empty()
            })
            .collect();
        matched.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));
        matched
    }

    /// Open and resolved counts per project, sorted by name.
    pub fn projects(&self) -> Vec<ProjectSummary> {
        let mut by_name: BTreeMap<String, ProjectSummary> = BTreeMap::new();
        for task in &self.tasks {
            if task.project.is_empty() {
                continue;
            }
            let summary = by_name
                .entry(task.project.clone())
                .or_insert_with(|| ProjectSummary {
                    name: task.project.clone(),
                    ..ProjectSummary::default()
                });
            if task.status == STATUS_RESOLVED {
                summary.resolved += 1;
            } else {
                summary.open += 1;
            }
        }
        by_name.into_values().collect()
    }

    /// Every tag on a non-resolved task, sorted and unique.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: BTreeSet<String> = BTreeSet::new();
        for task in &self.tasks {
            if task.status != STATUS_RESOLVED {
                for tag in &task.tags {
                    tags.insert(tag.clone());
                }
            }
        }
        tags.into_iter().collect()
    }
}

/// Display order of statuses: what is being worked on first, then what
/// was set aside, then the rest.
fn status_rank(status: &str) -> u8 {
    match status {
        STATUS_ACTIVE => 0,
        STATUS_PAUSED => 1,
        _ => 2,
    }
}

fn lowest_free_id(used: &HashSet<i64>) -> i64 {
    let mut id = 1;
    while used.contains(&id) {
        id += 1;
    }
    id
}
