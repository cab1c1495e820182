use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::{Context, Result};
use dirs::home_dir;
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV_VAR: &str = "CARDAPIO_CONFIG";
const APP_DIR: &str = "cardapio";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Menu data file used when neither `--data` nor `CARDAPIO_DATA` is set.
    #[serde(default)]
    pub data: Option<PathBuf>,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Smooth pill scrolling and staggered card reveal.
    #[serde(default = "default_true")]
    pub animations: bool,
    /// Key hint line at the bottom of the screen.
    #[serde(default = "default_true")]
    pub help_hint: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animations: true,
            help_hint: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive menu.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Directory holding the config, the default data file and the log file.
pub fn app_dir() -> Result<PathBuf> {
    let home = home_dir()
        .ok_or_else(|| anyhow::anyhow!("Failed to determine HOME directory"))?;
    Ok(home.join(".config").join(APP_DIR))
}

pub fn default_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    Ok(app_dir()?.join(CONFIG_FILE))
}

/// Loads the config from `path`, or from the default location.
///
/// A missing file at the default location yields the default config; a
/// missing file that was asked for explicitly is an error.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                tracing::debug!(
                    "No config at {}, using defaults",
                    p.display()
                );
                return Ok(Config::default());
            }
            p
        }
    };

    let content = fs::read_to_string(&path).with_context(|| {
        format!("Failed to read config from {}", path.display())
    })?;

    parse(&content).with_context(|| {
        format!("Failed to parse config from {}", path.display())
    })
}

pub fn parse(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}
