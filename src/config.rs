use crate::error::{ListatronError, Result};
use listatron_common::{FormLayout, SlotCells};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_TEMPLATE_SHEET: &str = "Reservas";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sheet of the template that holds the ten forms
    pub template_sheet: String,
    /// Client list sheet; first sheet when unset
    pub client_sheet: Option<String>,
    /// Replacement for the built-in slot table
    pub slot_layout: Option<Vec<SlotCells>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_sheet: DEFAULT_TEMPLATE_SHEET.into(),
            client_sheet: None,
            slot_layout: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Like `load`, but a missing home or a corrupt file falls back to the
    /// defaults so the file can still be rewritten.
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                warn!(error = %e, "config unavailable, using defaults");
                Self::default().with_env()
            }
        }
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        Ok(config.with_env())
    }

    pub fn load_from_or_default(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            warn!(path = %config_path.display(), error = %e, "config unreadable, using defaults");
            Self::default().with_env()
        })
    }

    // Environment overrides the file
    fn with_env(mut self) -> Self {
        if let Ok(sheet) = std::env::var("LISTATRON_TEMPLATE_SHEET") {
            if !sheet.trim().is_empty() {
                self.template_sheet = sheet;
            }
        }
        self
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ListatronError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("listatron").join("config.json"))
    }

    /// Slot layout in effect: the configured one, else the built-in table.
    pub fn form_layout(&self) -> Result<FormLayout> {
        match &self.slot_layout {
            Some(slots) => Ok(FormLayout::from_slots(slots.clone())?),
            None => Ok(FormLayout::default()),
        }
    }
}
