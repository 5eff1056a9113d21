//! Output formatting utilities for the tsk CLI.
//!
//! This module renders tables and one-line confirmations; it never does
//! I/O itself. Submodules:
//!
//! - [`tasks`] - the task listing table and the context banner
//! - [`projects`] - project and tag summaries
//! - [`helpers`] - truncation and colouring utilities

pub mod helpers;
mod projects;
mod tasks;

pub use projects::{format_projects_table, format_tags_list};
pub use tasks::{format_context_banner, format_tasks_table};
