//! Loading of the menu data file.
use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::{GroupedCatalog, MenuItem};
use crate::config::{self, Config};

pub const DATA_ENV_VAR: &str = "CARDAPIO_DATA";
const DEFAULT_DATA_FILE: &str = "cardapio.json";

/// Contents of a menu data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuData {
    /// Display order of the category pills. May be empty.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl MenuData {
    pub fn into_catalog(self) -> GroupedCatalog {
        GroupedCatalog::build(self.items, self.categories)
    }
}

/// A data file is either the full document or just the item list.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMenuData {
    Items(Vec<MenuItem>),
    Full(MenuData),
}

impl From<RawMenuData> for MenuData {
    fn from(raw: RawMenuData) -> Self {
        match raw {
            RawMenuData::Items(items) => MenuData {
                categories: Vec::new(),
                items,
            },
            RawMenuData::Full(data) => data,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
    Toml,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => anyhow::bail!(
                "Unsupported menu data format for {:?} (expected .json, .yaml, .yml or .toml)",
                path
            ),
        }
    }
}

/// Picks the data file: `cli` > `CARDAPIO_DATA` > config > default location.
pub fn resolve_data_path(cli: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = cli {
        return Ok(path.to_path_buf());
    }

    if let Ok(path) = env::var(DATA_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    if let Some(path) = &config.data {
        return Ok(path.clone());
    }

    Ok(config::app_dir()?.join(DEFAULT_DATA_FILE))
}

pub fn load_menu_data(path: &Path) -> Result<MenuData> {
    let format = DataFormat::from_path(path)?;
    let content = fs::read_to_string(path).with_context(|| {
        format!("Failed to read menu data from {}", path.display())
    })?;

    let data = parse_menu_data(&content, format).with_context(|| {
        format!("Failed to parse menu data from {}", path.display())
    })?;

    tracing::info!(
        items = data.items.len(),
        categories = data.categories.len(),
        "Loaded menu data from {}",
        path.display()
    );

    Ok(data)
}

pub fn parse_menu_data(content: &str, format: DataFormat) -> Result<MenuData> {
    let data: MenuData = match format {
        DataFormat::Json => serde_json::from_str::<RawMenuData>(content)?.into(),
        DataFormat::Yaml => serde_yaml::from_str::<RawMenuData>(content)?.into(),
        DataFormat::Toml => toml::from_str(content)?,
    };

    validate(&data)?;
    Ok(data)
}

fn validate(data: &MenuData) -> Result<()> {
    for item in &data.items {
        if !item.price.is_finite() || item.price < 0.0 {
            anyhow::bail!(
                "Item {:?} has an invalid price {} (must be a non-negative number)",
                item.name,
                item.price
            );
        }
    }
    Ok(())
}
