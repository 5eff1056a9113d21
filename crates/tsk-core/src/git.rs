//! Git plumbing for the task repository.
//!
//! Every mutation of the repository ends in a commit, which is what makes
//! `undo` and `sync` possible. Git itself is driven as a subprocess; the
//! repository is an ordinary clone the user can inspect and operate on
//! directly.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Errors that can occur while driving git.
#[derive(Debug, Error)]
pub enum GitError {
    /// The `git` binary could not be run at all.
    #[error("failed to run git: {0}")]
    Spawn(#[source] io::Error),

    /// A git command ran and failed.
    #[error("git {args} failed: {stderr}")]
    Failed {
        /// The arguments the command was run with.
        args: String,
        /// Whatever git printed to stderr, trimmed.
        stderr: String,
    },

    /// The repository directory could not be created.
    #[error("failed to create repository directory '{path}': {source}")]
    CreateDir {
        /// The directory that failed to create.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Result type for git operations.
pub type Result<T> = std::result::Result<T, GitError>;

/// A git working tree holding the task repository.
#[derive(Debug, Clone)]
pub struct GitRepo {
    dir: PathBuf,
}

impl GitRepo {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Runs git with `args`, capturing output.
    ///
    /// # Errors
    ///
    /// Returns `GitError::Spawn` if git cannot be started and
    /// `GitError::Failed` with git's stderr if it exits non-zero.
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.dir)
            .output()
            .map_err(GitError::Spawn)?;

        if !output.status.success() {
            return Err(GitError::Failed {
                args: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Whether the directory is inside a git repository.
    pub fn is_repo(&self) -> bool {
        Command::new("git")
            .args(["rev-parse", "--git-dir"])
            .current_dir(&self.dir)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Creates the directory and initialises a repository in it, if either
    /// is missing. Safe to call on every invocation.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CreateDir` if the directory cannot be created,
    /// or the failure of `git init`.
    pub fn ensure_repo(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| GitError::CreateDir {
            path: self.dir.clone(),
            source: e,
        })?;
        if !self.is_repo() {
            self.run(&["init"])?;
        }
        Ok(())
    }

    /// Whether the working tree has uncommitted changes.
    ///
    /// # Errors
    ///
    /// Returns the failure of `git status`.
    pub fn is_dirty(&self) -> Result<bool> {
        let status = self.run(&["status", "--porcelain"])?;
        Ok(!status.trim().is_empty())
    }

    /// Stages everything and commits it under `message`.
    ///
    /// Returns `false` without committing when there is nothing to commit,
    /// so callers can run it after every command unconditionally.
    ///
    /// # Errors
    ///
    /// Returns the failure of the underlying `git add` or `git commit`.
    pub fn commit_all(&self, message: &str) -> Result<bool> {
        self.run(&["add", "-A"])?;
        if !self.is_dirty()? {
            return Ok(false);
        }
        self.run(&["commit", "--no-gpg-sign", "-m", message])?;
        Ok(true)
    }

    /// Reverts the most recent commit with a new commit.
    ///
    /// # Errors
    ///
    /// Returns the failure of `git revert`, for instance when there is no
    /// commit to revert or the revert does not apply cleanly.
    pub fn undo(&self) -> Result<()> {
        self.run(&["revert", "--no-gpg-sign", "--no-edit", "HEAD"])?;
        Ok(())
    }

    /// Pulls from and pushes to the configured remote.
    ///
    /// Merge commits are accepted; the per-task file layout keeps them
    /// conflict-free as long as two machines did not edit the same task.
    ///
    /// # Errors
    ///
    /// Returns the failure of `git pull` or `git push`, for instance when
    /// no remote is configured.
    pub fn sync(&self) -> Result<()> {
        self.run(&["pull", "--no-rebase", "--no-edit"])?;
        self.run(&["push"])?;
        Ok(())
    }

    /// Runs a raw git command in the repository with inherited stdio, and
    /// returns its exit code.
    ///
    /// # Errors
    ///
    /// Returns `GitError::Spawn` if git cannot be started. A non-zero exit
    /// code is not an error here; it is passed back for the process exit.
    pub fn passthrough(&self, args: &[String]) -> Result<i32> {
        let status = Command::new("git")
            .args(args)
            .current_dir(&self.dir)
            .status()
            .map_err(GitError::Spawn)?;
        Ok(status.code().unwrap_or(0))
    }
}
