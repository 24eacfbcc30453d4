// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Checker configuration: the size catalog, whitelists, and density threshold.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{PrintReadyError, Result};
use crate::types::{AspectRatio, StandardSize};

/// Minimum print density per axis, in dots per inch.
pub const MIN_DPI: u32 = 300;

/// Centimetres in one inch.
pub const CM_PER_INCH: f64 = 2.54;

/// The curated catalog of standard print sizes, smallest first.
///
/// The order is nominal, not strictly by area; the resolver relies on it as
/// given.
pub const STANDARD_SIZES: [StandardSize; 28] = [
    StandardSize::new(20, 20),
    StandardSize::new(20, 30),
    StandardSize::new(21, 38),
    StandardSize::new(24, 36),
    StandardSize::new(25, 25),
    StandardSize::new(30, 30),
    StandardSize::new(35, 35),
    StandardSize::new(30, 45),
    StandardSize::new(30, 90),
    StandardSize::new(40, 40),
    StandardSize::new(40, 60),
    StandardSize::new(45, 60),
    StandardSize::new(50, 50),
    StandardSize::new(50, 75),
    StandardSize::new(50, 100),
    StandardSize::new(50, 150),
    StandardSize::new(60, 60),
    StandardSize::new(60, 80),
    StandardSize::new(60, 90),
    StandardSize::new(70, 70),
    StandardSize::new(80, 80),
    StandardSize::new(80, 120),
    StandardSize::new(90, 180),
    StandardSize::new(100, 100),
    StandardSize::new(100, 150),
    StandardSize::new(120, 120),
    StandardSize::new(120, 160),
    StandardSize::new(120, 180),
];

/// Accepted aspect ratios (short side / long side).
pub const STANDARD_ASPECT_RATIOS: [AspectRatio; 4] = [
    AspectRatio::new(2, 3),
    AspectRatio::new(3, 4),
    AspectRatio::new(1, 1),
    AspectRatio::new(1, 3),
];

/// Accepted ICC profile descriptions, matched verbatim.
pub const STANDARD_PROFILE_DESCRIPTIONS: [&str; 1] = ["sRGB IEC61966-2.1"];

/// Everything the validation engine compares an image against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Standard print sizes, smallest first.
    pub standard_sizes: Vec<StandardSize>,
    /// Accepted aspect ratios, compared after rounding to two decimals.
    pub aspect_ratios: Vec<AspectRatio>,
    /// Accepted ICC profile descriptions (case-sensitive).
    pub profile_descriptions: Vec<String>,
    /// Minimum density per axis; both axes together must reach twice this.
    pub min_dpi: u32,
    /// Conversion factor from inches to centimetres.
    pub cm_per_inch: f64,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            standard_sizes: STANDARD_SIZES.to_vec(),
            aspect_ratios: STANDARD_ASPECT_RATIOS.to_vec(),
            profile_descriptions: STANDARD_PROFILE_DESCRIPTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_dpi: MIN_DPI,
            cm_per_inch: CM_PER_INCH,
        }
    }
}

impl CheckerConfig {
    /// Reject configurations the engine cannot evaluate meaningfully.
    pub fn validate(&self) -> Result<()> {
        if self.standard_sizes.is_empty() {
            return Err(config_error("the standard size catalog is empty"));
        }

        let mut seen = HashSet::with_capacity(self.standard_sizes.len());
        for size in &self.standard_sizes {
            if size.width_cm == 0 || size.height_cm == 0 {
                return Err(config_error(format!("standard size {size} has a zero side")));
            }
            if size.width_cm > size.height_cm {
                return Err(config_error(format!(
                    "standard size {size} must list the short side first"
                )));
            }
            if !seen.insert(*size) {
                return Err(config_error(format!("standard size {size} is listed twice")));
            }
        }

        if self.aspect_ratios.is_empty() {
            return Err(config_error("no aspect ratio is accepted"));
        }
        if let Some(ratio) = self
            .aspect_ratios
            .iter()
            .find(|r| r.numerator == 0 || r.denominator == 0)
        {
            return Err(config_error(format!(
                "aspect ratio {}/{} has a zero term",
                ratio.numerator, ratio.denominator
            )));
        }

        if self.profile_descriptions.is_empty() {
            return Err(config_error("no color profile description is accepted"));
        }
        if self.min_dpi == 0 {
            return Err(config_error("min_dpi must be positive"));
        }
        if !(self.cm_per_inch.is_finite() && self.cm_per_inch > 0.0) {
            return Err(config_error("cm_per_inch must be a positive number"));
        }
        Ok(())
    }
}

fn config_error(msg: impl Into<String>) -> PrintReadyError {
    PrintReadyError::Config(msg.into())
}
