//! Context menu configuration.
//!
//! Read from `~/.easel/context_menu.json`. Every field is optional; a missing
//! file means all defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_DIR, CONFIG_FILE, DEFAULT_DANGEROUS_ACTIONS, DEFAULT_DATE_FORMAT, MENU_PADDING,
    MENU_ROW_HEIGHT, MENU_SEPARATOR_HEIGHT, MENU_WIDTH, VIEWPORT_MARGIN,
};
use crate::i18n::Locale;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuConfig {
    /// Clamp the menu inside the canvas viewport.
    pub fit_in_viewport: bool,
    pub viewport_margin: f32,
    pub width: f32,
    pub row_height: f32,
    pub separator_height: f32,
    pub padding: f32,
    /// strftime-style format for "insert current date".
    pub date_format: String,
    /// Action names rendered with the dangerous style.
    pub dangerous_actions: Vec<String>,
    /// Optional JSON translation file.
    pub locale_path: Option<PathBuf>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            fit_in_viewport: true,
            viewport_margin: VIEWPORT_MARGIN,
            width: MENU_WIDTH,
            row_height: MENU_ROW_HEIGHT,
            separator_height: MENU_SEPARATOR_HEIGHT,
            padding: MENU_PADDING,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            dangerous_actions: DEFAULT_DANGEROUS_ACTIONS.iter().map(|s| s.to_string()).collect(),
            locale_path: None,
        }
    }
}

impl MenuConfig {
    /// Load from the default location (~/.easel/context_menu.json).
    pub fn load_default() -> Result<Self> {
        let path = default_config_path()?;
        Self::load(&path)
    }

    /// Load from a specific path. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No menu config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read menu config: {:?}", path))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid menu config: {:?}", path))?;
        tracing::debug!("Loaded menu config from {:?}", path);
        Ok(config)
    }

    /// The configured locale, or built-in English.
    pub fn locale(&self) -> Result<Locale> {
        match &self.locale_path {
            Some(path) => Locale::load(path),
            None => Ok(Locale::english()),
        }
    }

    pub fn is_dangerous(&self, action_name: &str) -> bool {
        self.dangerous_actions.iter().any(|name| name == action_name)
    }
}

fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Home directory not found")?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
}
