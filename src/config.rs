// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor configuration, read from a YAML file.

use crate::error::Result;
use crate::models::settings::DEFAULT_BACKGROUND_IMAGE;
use crate::state::HISTORY_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "shotframe";
const STORE_FILE: &str = "store.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Undo (and redo) depth. Zero is raised to one.
    pub history_limit: usize,
    /// Background locator used when a stored background can't be resolved.
    pub default_background_image: String,
    /// Root of bundled background assets.
    pub asset_dir: Option<PathBuf>,
    /// Location of the key-value defaults store.
    pub store_path: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: HISTORY_LIMIT,
            default_background_image: DEFAULT_BACKGROUND_IMAGE.to_string(),
            asset_dir: None,
            store_path: None,
        }
    }
}

impl EditorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&yaml)?;
        Ok(config)
    }

    /// Like [`load`](Self::load) but falls back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// `<config dir>/shotframe/config.yaml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.yaml"))
    }

    /// Configured store path, or `<config dir>/shotframe/store.json`.
    pub fn resolved_store_path(&self) -> Option<PathBuf> {
        self.store_path
            .clone()
            .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR).join(STORE_FILE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: EditorConfig = serde_yaml::from_str("history_limit: 10\n").unwrap();
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.default_background_image, DEFAULT_BACKGROUND_IMAGE);
        assert_eq!(config.asset_dir, None);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join(format!("shotframe-missing-{}.yaml", uuid::Uuid::new_v4()));
        assert_eq!(EditorConfig::load_or_default(&path), EditorConfig::default());
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let path = std::env::temp_dir().join(format!("shotframe-bad-{}.yaml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "history_limit: [not, a, number]").unwrap();
        assert_eq!(EditorConfig::load_or_default(&path), EditorConfig::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_explicit_store_path_wins() {
        let config = EditorConfig {
            store_path: Some(PathBuf::from("/tmp/custom.json")),
            ..Default::default()
        };
        assert_eq!(config.resolved_store_path(), Some(PathBuf::from("/tmp/custom.json")));
    }
}
