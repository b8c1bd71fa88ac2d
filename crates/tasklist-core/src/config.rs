use crate::{TaskListError, TaskListResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_TITLE: &str = "Task Master";
const DEFAULT_SUBTITLE: &str = "Stay organized, get things done";
const DEFAULT_PLACEHOLDER: &str = "What needs to be done?";
const DEFAULT_EMPTY_TEXT: &str = "No tasks yet";
const DEFAULT_EMPTY_SUBTEXT: &str = "Add your first task to get started!";

/// Static labels shown by the front-end. Every field is optional in the
/// TOML file; unset fields fall back to the built-in wording.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub empty_text: Option<String>,
    #[serde(default)]
    pub empty_subtext: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taskmaster/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("taskmaster/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("taskmaster\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the default location. A missing file yields defaults; an
    /// unreadable or malformed one is logged and also yields defaults.
    pub fn load() -> Self {
        let Some(config_path) = Self::config_path() else {
            return Self::default();
        };
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config: {}", e);
                Self::default()
            }
        }
    }

    /// Load from an explicit path, reporting read and parse failures.
    pub fn load_from(path: &Path) -> TaskListResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| match e {
            TaskListError::Config { message, .. } => TaskListError::config(path, message),
            other => other,
        })
    }

    pub fn parse(content: &str) -> TaskListResult<Self> {
        toml::from_str(content).map_err(|e| TaskListError::config("<inline>", e))
    }

    pub fn effective_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn effective_subtitle(&self) -> &str {
        self.subtitle.as_deref().unwrap_or(DEFAULT_SUBTITLE)
    }

    pub fn effective_placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or(DEFAULT_PLACEHOLDER)
    }

    pub fn effective_empty_text(&self) -> &str {
        self.empty_text.as_deref().unwrap_or(DEFAULT_EMPTY_TEXT)
    }

    pub fn effective_empty_subtext(&self) -> &str {
        self.empty_subtext.as_deref().unwrap_or(DEFAULT_EMPTY_SUBTEXT)
    }
}
