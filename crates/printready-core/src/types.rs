// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for printready.

use serde::{Deserialize, Serialize};

/// A standard physical print size in centimetres, short side first.
///
/// Serialised as a `[width_cm, height_cm]` pair so catalogs stay compact in
/// JSON configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct StandardSize {
    pub width_cm: u32,
    pub height_cm: u32,
}

impl StandardSize {
    pub const fn new(width_cm: u32, height_cm: u32) -> Self {
        Self {
            width_cm,
            height_cm,
        }
    }

    /// Dimensions in inches (width, height) for the given conversion factor.
    pub fn to_inches(&self, cm_per_inch: f64) -> (f64, f64) {
        (
            self.width_cm as f64 / cm_per_inch,
            self.height_cm as f64 / cm_per_inch,
        )
    }
}

impl From<(u32, u32)> for StandardSize {
    fn from((width_cm, height_cm): (u32, u32)) -> Self {
        Self::new(width_cm, height_cm)
    }
}

impl From<StandardSize> for (u32, u32) {
    fn from(size: StandardSize) -> Self {
        (size.width_cm, size.height_cm)
    }
}

impl std::fmt::Display for StandardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} cm", self.width_cm, self.height_cm)
    }
}

/// An accepted aspect ratio, expressed as an exact fraction (short / long).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct AspectRatio {
    pub numerator: u32,
    pub denominator: u32,
}

impl AspectRatio {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// The ratio rounded to two decimals, in hundredths (2/3 -> 67).
    pub fn hundredths(&self) -> u64 {
        rounded_hundredths(self.numerator as u64, self.denominator as u64)
    }
}

impl From<(u32, u32)> for AspectRatio {
    fn from((numerator, denominator): (u32, u32)) -> Self {
        Self::new(numerator, denominator)
    }
}

impl From<AspectRatio> for (u32, u32) {
    fn from(ratio: AspectRatio) -> Self {
        (ratio.numerator, ratio.denominator)
    }
}

/// Round the floating-point quotient `numerator / denominator` to two
/// decimals and return it in hundredths.
///
/// The quotient is rounded as the double it is stored as, so 1330/2000
/// (stored just above 0.665) gives 67 and 1990/2000 (stored just below
/// 0.995) gives 99. `denominator` must be non-zero.
pub fn rounded_hundredths(numerator: u64, denominator: u64) -> u64 {
    let quotient = numerator as f64 / denominator as f64;
    // `{:.2}` rounds the exact binary value; a finite, non-negative quotient
    // always renders as digits, a dot, and two digits.
    let rendered = format!("{quotient:.2}");
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "0"));
    whole.parse::<u64>().unwrap_or_default() * 100 + fraction.parse::<u64>().unwrap_or_default()
}

/// Render a value in hundredths as a decimal with trailing zeros dropped,
/// keeping at least one decimal ("0.67", "0.5", "1.0").
pub fn format_hundredths(hundredths: u64) -> String {
    let whole = hundredths / 100;
    let fraction = hundredths % 100;
    if fraction % 10 == 0 {
        format!("{whole}.{}", fraction / 10)
    } else {
        format!("{whole}.{fraction:02}")
    }
}

/// Pixel dimensions of a decoded raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelDimensions {
    pub width_px: u32,
    pub height_px: u32,
}

impl PixelDimensions {
    pub const fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// True when the short side is already the width.
    pub fn is_portrait_or_square(&self) -> bool {
        self.width_px <= self.height_px
    }
}

impl std::fmt::Display for PixelDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px x {}px", self.width_px, self.height_px)
    }
}

/// Per-axis print density achieved at a given physical size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisDpi {
    pub x: u64,
    pub y: u64,
}

impl AxisDpi {
    /// Combined density of both axes, compared against twice the minimum.
    pub fn combined(&self) -> u64 {
        self.x + self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitelisted_ratios_round_to_two_decimals() {
        assert_eq!(AspectRatio::new(2, 3).hundredths(), 67);
        assert_eq!(AspectRatio::new(3, 4).hundredths(), 75);
        assert_eq!(AspectRatio::new(1, 1).hundredths(), 100);
        assert_eq!(AspectRatio::new(1, 3).hundredths(), 33);
    }

    #[test]
    fn decimal_ties_follow_the_stored_double() {
        // 0.665 is stored slightly above the tie, 0.995 slightly below.
        assert_eq!(rounded_hundredths(1330, 2000), 67);
        assert_eq!(rounded_hundredths(1300, 4000), 33);
        assert_eq!(rounded_hundredths(1990, 2000), 99);
        assert_eq!(rounded_hundredths(3, 8), 38);
    }

    #[test]
    fn quotients_above_one_round_too() {
        assert_eq!(rounded_hundredths(3, 2), 150);
        assert_eq!(rounded_hundredths(7, 3), 233);
    }

    #[test]
    fn hundredths_format_drops_trailing_zeros() {
        assert_eq!(format_hundredths(67), "0.67");
        assert_eq!(format_hundredths(50), "0.5");
        assert_eq!(format_hundredths(100), "1.0");
        assert_eq!(format_hundredths(5), "0.05");
    }

    #[test]
    fn standard_size_serialises_as_pair() {
        let json = serde_json::to_string(&StandardSize::new(20, 30)).unwrap();
        assert_eq!(json, "[20,30]");
        let back: StandardSize = serde_json::from_str("[120,180]").unwrap();
        assert_eq!(back, StandardSize::new(120, 180));
    }

    #[test]
    fn pixel_dimensions_display_matches_hint_format() {
        assert_eq!(PixelDimensions::new(1, 1).to_string(), "1px x 1px");
    }

    #[test]
    fn inches_use_conversion_factor() {
        let (w, h) = StandardSize::new(254, 508).to_inches(2.54);
        assert!((w - 100.0).abs() < 1e-9);
        assert!((h - 200.0).abs() < 1e-9);
    }
}
