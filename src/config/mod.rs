use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;


pub const PROJECT_CONFIG_DIR: &str = ".searchbox";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Fully resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub placeholder: String,
    pub debounce_ms: u64,
    pub page_size: usize,
    pub theme: String,
    pub rows_file: Option<PathBuf>,
    pub start_location: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            placeholder: "Search...".to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            page_size: DEFAULT_PAGE_SIZE,
            theme: "dark".to_string(),
            rows_file: None,
            start_location: "/dashboard/invoices".to_string(),
        }
    }
}

/// Partial configuration from a config file, the environment, or CLI
/// flags. Later layers win field by field.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FileConfig {
    pub placeholder: Option<String>,
    pub debounce_ms: Option<u64>,
    pub page_size: Option<usize>,
    pub theme: Option<String>,
    pub rows_file: Option<PathBuf>,
    pub start_location: Option<String>,
}

impl FileConfig {
    pub fn merge(self, over: FileConfig) -> FileConfig {
        FileConfig {
            placeholder: over.placeholder.or(self.placeholder),
            debounce_ms: over.debounce_ms.or(self.debounce_ms),
            page_size: over.page_size.or(self.page_size),
            theme: over.theme.or(self.theme),
            rows_file: over.rows_file.or(self.rows_file),
            start_location: over.start_location.or(self.start_location),
        }
    }
}

fn load_config_file(path: &Path) -> Result<FileConfig> {
    if !path.is_file() {
        return Ok(FileConfig::default());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))
}

/// `~/.config/searchbox/config.toml` (platform equivalent via dirs).
pub fn load_user_config() -> Result<FileConfig> {
    match dirs::config_dir() {
        Some(dir) => load_config_file(&dir.join("searchbox").join("config.toml")),
        None => Ok(FileConfig::default()),
    }
}

/// `<root>/.searchbox/config.toml`.
pub fn load_project_config(root: &Path) -> Result<FileConfig> {
    load_config_file(&root.join(PROJECT_CONFIG_DIR).join("config.toml"))
}

/// `SEARCHBOX_*` environment overrides.
pub fn env_config() -> FileConfig {
    fn var(name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
    let debounce_ms = var("SEARCHBOX_DEBOUNCE_MS").and_then(|v| match v.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!(value = %v, "ignoring unparsable SEARCHBOX_DEBOUNCE_MS");
            None
        }
    });
    let page_size = var("SEARCHBOX_PAGE_SIZE").and_then(|v| match v.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!(value = %v, "ignoring unparsable SEARCHBOX_PAGE_SIZE");
            None
        }
    });
    FileConfig {
        placeholder: var("SEARCHBOX_PLACEHOLDER"),
        debounce_ms,
        page_size,
        theme: var("SEARCHBOX_THEME"),
        rows_file: var("SEARCHBOX_ROWS_FILE").map(PathBuf::from),
        start_location: var("SEARCHBOX_START_LOCATION"),
    }
}

impl AppConfig {
    /// Layered resolution: defaults < user config < project config <
    /// environment < CLI.
    pub fn resolve(cli: FileConfig) -> Result<Self> {
        let project_root = std::env::current_dir().context("resolve current dir")?;
        let merged = load_user_config()?
            .merge(load_project_config(&project_root)?)
            .merge(env_config())
            .merge(cli);
        let defaults = AppConfig::default();
        Ok(AppConfig {
            placeholder: merged.placeholder.unwrap_or(defaults.placeholder),
            debounce_ms: merged.debounce_ms.unwrap_or(defaults.debounce_ms),
            page_size: merged.page_size.unwrap_or(defaults.page_size).max(1),
            theme: merged.theme.unwrap_or(defaults.theme),
            rows_file: merged.rows_file,
            start_location: merged.start_location.unwrap_or(defaults.start_location),
        })
    }
}
