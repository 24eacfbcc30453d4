// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Check service — the boundary around the engine. Filters uploads by file
// extension, reads them, runs the checker, and turns the outcome into what
// the uploader sees.

use std::path::Path;

use printready_check::{CheckReport, ImageChecker, fingerprint};
use printready_core::error::{PrintReadyError, Result};
use printready_core::human_errors::{ClientResponse, client_response};
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::app_config::AppConfig;

/// Result of checking one upload, serialised as one JSON line.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub file: String,
    pub valid: bool,
    /// SHA-256 of the upload, when it could be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    #[serde(flatten)]
    pub report: Option<CheckReport>,
    #[serde(flatten)]
    pub error: Option<ClientResponse>,
}

impl FileOutcome {
    fn passed(file: &str, sha256: String, report: CheckReport) -> Self {
        Self {
            file: file.to_owned(),
            valid: true,
            sha256: Some(sha256),
            report: Some(report),
            error: None,
        }
    }

    fn failed(file: &str, sha256: Option<String>, err: &PrintReadyError) -> Self {
        warn!(file, error = %err, "Upload rejected");
        Self {
            file: file.to_owned(),
            valid: false,
            sha256,
            report: None,
            error: Some(client_response(err)),
        }
    }
}

/// Engine plus upload whitelist, built once from an [`AppConfig`].
#[derive(Debug, Clone)]
pub struct CheckService {
    checker: ImageChecker,
    allowed_extensions: Vec<String>,
}

impl CheckService {
    /// Validate the configuration and build the service.
    pub fn new(config: AppConfig) -> Result<Self> {
        let allowed_extensions: Vec<String> = config
            .allowed_extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
            .collect();
        if allowed_extensions.is_empty() {
            return Err(PrintReadyError::Config(
                "no upload file extension is allowed".into(),
            ));
        }

        let checker = ImageChecker::new(config.checker)?;
        info!(extensions = ?allowed_extensions, "Check service ready");
        Ok(Self {
            checker,
            allowed_extensions,
        })
    }

    /// Accept a file name only if its extension is whitelisted
    /// (case-insensitive).
    pub fn accepts(&self, file_name: &str) -> Result<()> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension {
            Some(ext) if self.allowed_extensions.contains(&ext) => Ok(()),
            _ => Err(PrintReadyError::UnsupportedExtension(format!(
                "[{}]",
                self.allowed_extensions.join(", ")
            ))),
        }
    }

    /// Check an upload already in memory.
    #[instrument(skip(self, data), fields(data_len = data.len()))]
    pub fn check_upload(&self, file_name: &str, data: &[u8]) -> FileOutcome {
        if let Err(err) = self.accepts(file_name) {
            return FileOutcome::failed(file_name, None, &err);
        }

        let sha256 = fingerprint(data);
        match self.checker.inspect(data) {
            Ok(report) => {
                info!(file = file_name, %sha256, max_size = %report.max_size, "Upload accepted");
                FileOutcome::passed(file_name, sha256, report)
            }
            Err(err) => FileOutcome::failed(file_name, Some(sha256), &err),
        }
    }

    /// Check a file on disk. The extension is checked before anything is read.
    pub fn check_file(&self, path: &Path) -> FileOutcome {
        let file_name = path.display().to_string();
        if let Err(err) = self.accepts(&file_name) {
            return FileOutcome::failed(&file_name, None, &err);
        }

        match std::fs::read(path) {
            Ok(data) => self.check_upload(&file_name, &data),
            Err(err) => FileOutcome::failed(&file_name, None, &PrintReadyError::Io(err)),
        }
    }
}
