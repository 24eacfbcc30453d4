// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for printready.

use serde::Serialize;
use thiserror::Error;

/// Top-level error type for all printready operations.
#[derive(Debug, Error)]
pub enum PrintReadyError {
    // -- Engine errors --
    /// The uploaded bytes are not a decodable image.
    #[error("the given image is not correct: {0}")]
    ImageFile(String),

    /// A print-readiness rule failed.
    #[error(transparent)]
    Check(#[from] CheckError),

    // -- Boundary errors --
    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Which print-readiness rule rejected the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckRule {
    AspectRatio,
    /// No embedded ICC profile at all.
    ProfileMissing,
    /// Profile present but its description is not whitelisted.
    ProfileMismatch,
    /// Profile present but its description could not be read.
    ProfileUnreadable,
    PrintSize,
}

/// A failed business rule: a primary diagnostic plus remediation hints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CheckError {
    pub rule: CheckRule,
    pub message: String,
    pub hints: Vec<String>,
}

impl CheckError {
    pub fn new(rule: CheckRule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
            hints: Vec::new(),
        }
    }

    /// Append a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// The message followed by every hint, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.message.as_str()).chain(self.hints.iter().map(String::as_str))
    }

    /// All lines joined with newlines, as shown to the uploader.
    pub fn detail(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PrintReadyError>;
