//! Task repository storage.
//!
//! The repository is a plain directory tree, one YAML document per task:
//!
//! ```text
//! <root>/pending/<uuid>.yml
//! <root>/active/<uuid>.yml
//! <root>/resolved/<uuid>.yml
//! ...
//! ```
//!
//! A task's UUID is its filename and its status is the directory it sits
//! in, so moving a file between directories is a status change and the
//! documents themselves never repeat either field. Because the content is
//! line-oriented YAML the whole tree diffs and merges well under git.
//!
//! Per-clone state (the standing context) lives under `.git/tsk/`, where
//! it is invisible to the synced tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::query::CmdLine;
use crate::task::Task;
use crate::taskset::TaskSet;
use crate::vocab::ALL_STATUSES;

/// Task file extension.
const TASK_FILE_EXT: &str = "yml";

/// State filename, kept under the git directory.
const STATE_FILENAME: &str = "state.json";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "tsk";

/// Errors that can occur during repository storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to determine the default repository location.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// I/O error during file or directory read.
    #[error("failed to read '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file write.
    #[error("failed to write '{path}': {source}")]
    WriteError {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during directory creation.
    #[error("failed to create directory '{path}': {source}")]
    CreateDirError {
        /// The directory path that failed to create.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file delete.
    #[error("failed to delete '{path}': {source}")]
    DeleteError {
        /// The path that failed to delete.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Malformed task document.
    #[error("malformed task file '{path}': {source}")]
    Yaml {
        /// The file that failed to parse or serialize.
        path: PathBuf,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON serialization/deserialization error in the state file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for repository storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Cross-invocation state.
///
/// Kept per clone rather than in the synced tree, so each machine carries
/// its own standing context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    /// The standing context merged into most commands.
    pub context: CmdLine,
}

/// Persistent storage for the task repository.
///
/// `TaskStore` owns the directory layout: it derives each task's UUID and
/// status from where the file sits, and puts them back there on save. The
/// default location is the XDG data directory, `~/.local/share/tsk` on
/// Unix systems.
///
/// # Example
///
/// ```no_run
/// use tsk_core::{TaskStore, vocab::NON_RESOLVED_STATUSES};
///
/// let store = TaskStore::new()?;
/// let mut set = store.load_task_set(NON_RESOLVED_STATUSES)?;
/// store.save(&mut set)?;
/// # Ok::<(), tsk_core::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TaskStore {
    /// Repository root directory.
    root: PathBuf,
}

impl TaskStore {
    /// Creates a `TaskStore` rooted at the default XDG data path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoDataDir` if the home directory cannot be
    /// determined.
    pub fn new() -> Result<Self> {
        let root = Self::default_root()?;
        Ok(Self { root })
    }

    /// Creates a `TaskStore` rooted at a custom directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the default repository root.
    ///
    /// On Unix: `~/.local/share/tsk`
    /// On macOS: `~/Library/Application Support/tsk`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoDataDir` if the home directory cannot be
    /// determined.
    pub fn default_root() -> Result<PathBuf> {
        let project_dirs =
            ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or(StoreError::NoDataDir)?;
        Ok(project_dirs.data_dir().to_path_buf())
    }

    /// Returns the repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the per-clone state file.
    pub fn state_path(&self) -> PathBuf {
        self.root.join(".git").join("tsk").join(STATE_FILENAME)
    }

    fn status_dir(&self, status: &str) -> PathBuf {
        self.root.join(status)
    }

    fn task_path(&self, status: &str, uuid: &str) -> PathBuf {
        self.status_dir(status)
            .join(format!("{uuid}.{TASK_FILE_EXT}"))
    }

    /// Loads every task filed under the given statuses.
    ///
    /// Missing status directories are treated as empty; a fresh repository
    /// loads as an empty set. Commands that take IDs must pass
    /// [`NON_RESOLVED_STATUSES`](crate::vocab::NON_RESOLVED_STATUSES) so
    /// ID assignment sees every task that holds one.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::ReadError` if a directory or file cannot be
    ///   read.
    /// - Returns `StoreError::Yaml` if a task document fails to parse; the
    ///   error names the offending file.
    pub fn load_task_set(&self, statuses: &[&str]) -> Result<TaskSet> {
        let mut tasks = Vec::new();

        for status in statuses {
            let dir = self.status_dir(status);
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(StoreError::ReadError {
                        path: dir,
                        source: e,
                    })
                }
            };

            for entry in entries {
                let entry = entry.map_err(|e| StoreError::ReadError {
                    path: dir.clone(),
                    source: e,
                })?;
                let path = entry.path();
                if path.extension().and_then(|ext| ext.to_str()) != Some(TASK_FILE_EXT) {
                    continue;
                }
                let Some(uuid) = path.file_stem().and_then(|stem| stem.to_str()) else {
                    continue;
                };

                let contents =
                    fs::read_to_string(&path).map_err(|e| StoreError::ReadError {
                        path: path.clone(),
                        source: e,
                    })?;
                let mut task: Task =
                    serde_yaml::from_str(&contents).map_err(|e| StoreError::Yaml {
                        path: path.clone(),
                        source: e,
                    })?;
                task.uuid = uuid.to_string();
                task.status = status.to_string();
                tasks.push(task);
            }
        }

        Ok(TaskSet::from_tasks(tasks))
    }

    /// Writes every task marked `write_pending` and clears the mark.
    ///
    /// Returns the number of files written.
    ///
    /// # Errors
    ///
    /// Stops at the first task that fails to write; earlier tasks stay
    /// written and keep their cleared mark.
    pub fn save(&self, set: &mut TaskSet) -> Result<usize> {
        let mut written = 0;
        for task in set.tasks_mut() {
            if !task.write_pending {
                continue;
            }
            self.write_task(task)?;
            task.write_pending = false;
            written += 1;
        }
        Ok(written)
    }

    /// Serializes one task into its status directory.
    ///
    /// The write is atomic (temp file + rename). Any copy of the task
    /// filed under a different status is removed afterwards, which is what
    /// makes a status change a file move.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::CreateDirError` if the status directory
    ///   cannot be created.
    /// - Returns `StoreError::WriteError` if the file cannot be written.
    /// - Returns `StoreError::Yaml` if serialization fails.
    /// - Returns `StoreError::DeleteError` if a stale copy cannot be
    ///   removed.
    pub fn write_task(&self, task: &Task) -> Result<()> {
        let dir = self.status_dir(&task.status);
        fs::create_dir_all(&dir).map_err(|e| StoreError::CreateDirError {
            path: dir.clone(),
            source: e,
        })?;

        let path = self.task_path(&task.status, &task.uuid);
        let yaml = serde_yaml::to_string(task).map_err(|e| StoreError::Yaml {
            path: path.clone(),
            source: e,
        })?;

        // Atomic write: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &yaml).map_err(|e| StoreError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &path).map_err(|e| StoreError::WriteError {
            path: path.clone(),
            source: e,
        })?;

        for status in ALL_STATUSES {
            if task.status == *status {
                continue;
            }
            remove_if_present(&self.task_path(status, &task.uuid))?;
        }

        Ok(())
    }

    /// Removes the task's file, wherever it is filed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DeleteError` if a file exists but cannot be
    /// removed. A task with no file on disk deletes cleanly.
    pub fn delete_task(&self, task: &Task) -> Result<()> {
        for status in ALL_STATUSES {
            remove_if_present(&self.task_path(status, &task.uuid))?;
        }
        Ok(())
    }

    /// Loads the per-clone state, or the default when none was saved yet.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::ReadError` for I/O errors other than "file
    ///   not found".
    /// - Returns `StoreError::Json` if the file contains invalid JSON.
    pub fn load_state(&self) -> Result<State> {
        let path = self.state_path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(State::default()),
            Err(e) => return Err(StoreError::ReadError { path, source: e }),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    /// Saves the per-clone state atomically.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::CreateDirError` if the state directory
    ///   cannot be created.
    /// - Returns `StoreError::WriteError` if the file cannot be written.
    /// - Returns `StoreError::Json` if serialization fails.
    pub fn save_state(&self, state: &State) -> Result<()> {
        let path = self.state_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(state)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &json).map_err(|e| StoreError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &path).map_err(|e| StoreError::WriteError {
            path: path.clone(),
            source: e,
        })?;

        Ok(())
    }
}

fn remove_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StoreError::DeleteError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
