//! Configuration management for tsk.
//!
//! The config file lives at `~/.config/tsk/config.toml`; the `TSK_CONFIG`
//! environment variable overrides the whole path. Everything in it is
//! optional, so a missing file is a valid configuration.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::commands::{CommandError, Result};
use tsk_core::TaskStore;

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Reference contents for a fresh config file; every key is optional.
#[allow(dead_code)]
const DEFAULT_CONFIG: &str = r#"# tsk - task tracker configuration

# Config schema version (do not modify)
version = 1

# Task repository location (can also use TSK_GIT_REPO env var)
# repo = "/home/you/.local/share/tsk"

# Output preferences
[output]
# color = true    # Force colors on or off; unset means auto (respects NO_COLOR)
# verbose = false # Print progress diagnostics to stderr
"#;

/// Configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Task repository location (optional, can use env var instead).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<PathBuf>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            repo: None,
            output: OutputConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Force colors on or off; unset means auto.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,

    /// Print progress diagnostics to stderr.
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Resolves the task repository root.
    ///
    /// Resolution order: `TSK_GIT_REPO` environment variable, then the
    /// `repo` key in the config file, then the XDG data directory.
    ///
    /// # Errors
    ///
    /// Returns a config error when no home directory can be determined
    /// and nothing else names a repository.
    pub fn repo_root(&self) -> Result<PathBuf> {
        if let Some(path) = env::var_os("TSK_GIT_REPO") {
            return Ok(PathBuf::from(path));
        }
        if let Some(repo) = &self.repo {
            return Ok(repo.clone());
        }
        TaskStore::default_root()
            .map_err(|e| CommandError::Config(format!("cannot locate a task repository: {e}")))
    }
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/tsk/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    // Check for override env var first
    if let Ok(path) = env::var("TSK_CONFIG") {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            return Ok(parent.to_path_buf());
        }
    }

    // Use XDG_CONFIG_HOME if set, otherwise ~/.config/tsk
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("tsk"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("tsk"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    // Check for override env var first
    if let Ok(path) = env::var("TSK_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk. A missing file is the default
/// configuration, not an error.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {e}")))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {e}")))?;

    // Migrate config if needed (stub for future migrations)
    migrate_config(config)
}

/// Migrates config to current version if needed.
/// Returns the config as-is if already at current version.
fn migrate_config(mut config: Config) -> Result<Config> {
    // No migrations needed yet - version 1 is the initial version
    // Future migrations would be handled here:
    //
    // if config.version < 2 {
    //     // Apply v1 -> v2 migration
    //     config.version = 2;
    // }

    // Ensure version is current
    config.version = CONFIG_VERSION;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.repo.is_none());
        assert!(config.output.color.is_none());
        assert!(!config.output.verbose);
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
version = 1
repo = "/srv/tasks"

[output]
color = false
verbose = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.version, 1);
        assert_eq!(config.repo, Some(PathBuf::from("/srv/tasks")));
        assert_eq!(config.output.color, Some(false));
        assert!(config.output.verbose);
    }

    #[test]
    fn test_config_deserialization_empty() {
        let config: Config = toml::from_str("").unwrap();
        // Missing version defaults to current version
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.repo.is_none());
    }

    #[test]
    fn test_config_deserialization_partial() {
        let toml_str = r#"
[output]
color = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.repo.is_none());
        assert_eq!(config.output.color, Some(true));
    }

    #[test]
    fn test_default_config_template_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
    }

    #[test]
    #[serial]
    fn test_load_config_from_tsk_config_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut file = fs::File::create(&config_path).unwrap();
        writeln!(file, "[output]\nverbose = true").unwrap();

        let original = env::var("TSK_CONFIG").ok();
        env::set_var("TSK_CONFIG", config_path.to_str().unwrap());

        let result = load_config();

        if let Some(val) = original {
            env::set_var("TSK_CONFIG", val);
        } else {
            env::remove_var("TSK_CONFIG");
        }

        let config = result.unwrap();
        assert!(config.output.verbose);
    }

    #[test]
    #[serial]
    fn test_load_config_missing_file_is_default() {
        let original = env::var("TSK_CONFIG").ok();
        env::set_var("TSK_CONFIG", "/tmp/tsk-test-nonexistent/config.toml");

        let result = load_config();

        if let Some(val) = original {
            env::set_var("TSK_CONFIG", val);
        } else {
            env::remove_var("TSK_CONFIG");
        }

        let config = result.unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.repo.is_none());
    }

    #[test]
    #[serial]
    fn test_repo_root_env_override_wins() {
        let original = env::var("TSK_GIT_REPO").ok();
        env::set_var("TSK_GIT_REPO", "/srv/override");

        let config = Config {
            repo: Some(PathBuf::from("/srv/from-config")),
            ..Config::default()
        };
        let result = config.repo_root();

        if let Some(val) = original {
            env::set_var("TSK_GIT_REPO", val);
        } else {
            env::remove_var("TSK_GIT_REPO");
        }

        assert_eq!(result.unwrap(), PathBuf::from("/srv/override"));
    }

    #[test]
    #[serial]
    fn test_repo_root_prefers_config_over_default() {
        let original = env::var("TSK_GIT_REPO").ok();
        env::remove_var("TSK_GIT_REPO");

        let config = Config {
            repo: Some(PathBuf::from("/srv/from-config")),
            ..Config::default()
        };
        let result = config.repo_root();

        if let Some(val) = original {
            env::set_var("TSK_GIT_REPO", val);
        }

        assert_eq!(result.unwrap(), PathBuf::from("/srv/from-config"));
    }
}
