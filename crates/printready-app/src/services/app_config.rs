// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration: the engine settings plus the upload whitelist.

use std::path::Path;

use printready_core::CheckerConfig;
use printready_core::error::{PrintReadyError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// File extensions accepted at upload, lowercase, without the dot.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "tiff"];

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Everything the validation engine compares an image against.
    pub checker: CheckerConfig,
    /// Upload file extensions the engine is allowed to see.
    pub allowed_extensions: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            checker: CheckerConfig::default(),
            allowed_extensions: ALLOWED_IMAGE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl AppConfig {
    /// Load settings from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data).map_err(|err| {
            PrintReadyError::Config(format!("{}: {err}", path.display()))
        })?;
        info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load from `explicit` if given (it must exist), else from `fallback` if
    /// that file exists, else use defaults.
    pub fn resolve(explicit: Option<&Path>, fallback: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if fallback.is_file() {
            return Self::load(fallback);
        }
        debug!("No configuration file, using defaults");
        Ok(Self::default())
    }
}
