//! Configuration handling for the TUI

use crate::state::SlotDropPolicy;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Path of the form document to edit and save
    pub form_path: Option<String>,
    /// What dropping into an occupied column slot does:
    /// "overwrite" (default) or "keep-existing"
    pub slot_drop_policy: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formdeck", "formdeck-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Default location of the form document
    fn default_form_path() -> PathBuf {
        ProjectDirs::from("io", "formdeck", "formdeck-tui")
            .map(|dirs| dirs.data_dir().join("form.json"))
            .unwrap_or_else(|| PathBuf::from("form.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Resolved path of the form document
    pub fn form_path(&self) -> PathBuf {
        self.form_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_form_path)
    }

    /// Resolved slot-drop policy; unknown values fall back to the default
    pub fn slot_policy(&self) -> SlotDropPolicy {
        match self.slot_drop_policy.as_deref() {
            Some("keep-existing") => SlotDropPolicy::KeepExisting,
            Some("overwrite") | None => SlotDropPolicy::Overwrite,
            Some(other) => {
                tracing::warn!(value = other, "unknown slot_drop_policy, using overwrite");
                SlotDropPolicy::Overwrite
            }
        }
    }
}
