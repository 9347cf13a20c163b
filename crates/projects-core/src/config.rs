use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};

use crate::error::ProjectsError;

/// File name of the workspace database inside the home directory.
pub const STATE_FILE_NAME: &str = "projects.json";

/// User configuration loaded from `<config_dir>/projects/config.toml`.
///
/// All fields have sensible defaults so the config file is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Editor command line, split into program and leading arguments.
    #[serde(default = "default_editor")]
    pub editor: String,
    pub state_path: Option<PathBuf>,
}

fn default_editor() -> String {
    "code".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: default_editor(),
            state_path: None,
        }
    }
}

impl Config {
    /// Load the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ProjectsError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ProjectsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        tracing::debug!("loading config from {}", path.display());
        let content =
            std::fs::read_to_string(path).map_err(|e| ProjectsError::SettingsRead(Box::new(e)))?;
        toml::from_str(&content).map_err(|e| ProjectsError::SettingsRead(Box::new(e)))
    }

    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "projects").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Location of the workspace database: the configured override, or
    /// `projects.json` in the user's home directory.
    pub fn state_path(&self) -> Result<PathBuf, ProjectsError> {
        if let Some(path) = &self.state_path {
            return Ok(path.clone());
        }
        BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(STATE_FILE_NAME))
            .ok_or(ProjectsError::HomeDirUnknown)
    }
}
