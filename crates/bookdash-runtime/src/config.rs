use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. BOOKDASH_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("BOOKDASH_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("bookdash").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no XDG config directory found".to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

const DEFAULT_FEATURED_AUTHORS: [&str; 5] = [
    "Stephen King",
    "Nora Roberts",
    "James Patterson",
    "John Grisham",
    "Mary Higgins Clark",
];

/// Sizes of the rankings on the Dashboard page and the authors that get
/// their own top-rated table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub top_titles: usize,
    pub top_titles_per_country: usize,
    pub top_authors: usize,
    pub top_rated_per_author: usize,
    pub featured_authors: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_titles: 10,
            top_titles_per_country: 10,
            top_authors: 5,
            top_rated_per_author: 5,
            featured_authors: DEFAULT_FEATURED_AUTHORS
                .iter()
                .map(|a| a.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: PathBuf,
    pub image_path: PathBuf,
    pub dashboard: DashboardConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("dataviz.csv"),
            image_path: PathBuf::from("book.png"),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path(None)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
