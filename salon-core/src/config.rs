//! Global salon configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{SalonError, SalonResult};

static DEFAULT_BASE_URL: &str = "http://localhost:5170/api";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn is_default_base_url(url: &String) -> bool {
    url == DEFAULT_BASE_URL
}

/// Which event-store implementation backs the calendar. Both speak the
/// same four-operation interface; this is configuration, not a second
/// code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// The remote booking API.
    #[default]
    Api,
    /// A JSON file under the platform data directory.
    Local,
}

/// Global configuration at ~/.config/salon/config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalonConfig {
    #[serde(default)]
    pub backend: BackendKind,

    #[serde(default = "default_base_url", skip_serializing_if = "is_default_base_url")]
    pub base_url: String,

    /// Opaque bearer token, attached to every API request when present.
    /// Absence is not an error here; the server's 401 is the signal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Override for the local backend's events file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl Default for SalonConfig {
    fn default() -> SalonConfig {
        SalonConfig {
            backend: BackendKind::default(),
            base_url: default_base_url(),
            token: None,
            store_path: None,
        }
    }
}

impl SalonConfig {
    pub fn config_path() -> SalonResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SalonError::Config("Could not determine config directory".into()))?
            .join("salon");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, falling back to defaults when no file exists yet.
    pub fn load() -> SalonResult<SalonConfig> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(SalonConfig::default());
        }

        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content)
            .map_err(|e| SalonError::Config(format!("Could not parse {}: {e}", path.display())))
    }

    /// Save the current config to ~/.config/salon/config.toml
    pub fn save(&self) -> SalonResult<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| SalonError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Where the local backend keeps its events file.
    pub fn events_path(&self) -> SalonResult<PathBuf> {
        if let Some(path) = &self.store_path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| SalonError::Config("Could not determine data directory".into()))?;
        Ok(data_dir.join("salon").join("events.json"))
    }

    /// Persist a new bearer token (the login flow).
    pub fn save_token(token: &str) -> SalonResult<()> {
        let mut config = Self::load()?;
        config.token = Some(token.to_string());
        config.save()
    }

    /// Discard the saved bearer token (logout, or after a 401).
    pub fn clear_token() -> SalonResult<()> {
        let mut config = Self::load()?;
        config.token = None;
        config.save()
    }
}
