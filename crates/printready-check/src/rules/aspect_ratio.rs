// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use printready_core::types::{format_hundredths, rounded_hundredths};
use printready_core::{AspectRatio, CheckError, CheckRule, PixelDimensions};

/// Check `width / height`, rounded to two decimals, against the accepted
/// ratios (each rounded the same way).
///
/// Returns the rounded ratio in hundredths. Expects a normalised image with a
/// non-zero height.
pub fn check_aspect_ratio(
    dimensions: PixelDimensions,
    accepted: &[AspectRatio],
) -> Result<u64, CheckError> {
    let ratio = rounded_hundredths(dimensions.width_px as u64, dimensions.height_px as u64);

    if accepted.iter().any(|r| r.hundredths() == ratio) {
        return Ok(ratio);
    }

    let whitelist = accepted
        .iter()
        .map(|r| format_hundredths(r.hundredths()))
        .collect::<Vec<_>>()
        .join(", ");
    Err(CheckError::new(
        CheckRule::AspectRatio,
        format!(
            "The image aspect ratio ({}) is not one of [{}].",
            format_hundredths(ratio),
            whitelist
        ),
    )
    .with_hint("You may crop your image with a standard ratio."))
}
