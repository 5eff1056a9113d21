//! Core library for the `tsk` task tracker.
//!
//! This crate holds everything the CLI is built on: the free-form
//! command-line query language, the task model with its canonicalisation
//! and matching rules, the YAML-per-task repository storage and the git
//! plumbing that records every change.
//!
//! The flow of a typical invocation:
//!
//! 1. [`parse_cmd_line`] classifies the raw arguments into a [`CmdLine`].
//! 2. The standing context from [`State`] is merged in with
//!    [`CmdLine::merge_context`].
//! 3. [`TaskStore::load_task_set`] loads the relevant statuses into a
//!    [`TaskSet`], which the command queries or mutates.
//! 4. [`TaskStore::save`] writes changed tasks back and [`GitRepo`]
//!    commits the result.

pub mod git;
pub mod query;
pub mod store;
pub mod task;
pub mod taskset;
pub mod vocab;

pub use git::{GitError, GitRepo};
pub use query::{parse_cmd_line, CmdLine, ContextConflict};
pub use store::{State, StoreError, TaskStore};
pub use task::{is_valid_uuid4, SubTask, Task, TaskError};
pub use taskset::{ProjectSummary, TaskSet};
