// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image checker — runs decode, orientation, and the three rules in a fixed
// order. The first failure aborts the run and is returned untouched; later
// checks never execute.

use printready_core::error::{PrintReadyError, Result};
use printready_core::types::format_hundredths;
use printready_core::{AxisDpi, CheckError, CheckerConfig, PixelDimensions, StandardSize};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::raster::{self, Image, Normalized};
use crate::rules::{PrintSizeResolver, check_aspect_ratio, check_color_profile};

/// Everything learned about an image that passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Dimensions after orientation normalisation (short side first).
    pub dimensions: PixelDimensions,
    /// Whether the upload was landscape and had to be turned.
    pub rotated: bool,
    /// Aspect ratio rounded to two decimals, e.g. "0.67".
    pub aspect_ratio: String,
    /// Description of the embedded ICC profile.
    pub profile_description: String,
    /// Largest printable standard size.
    pub max_size: StandardSize,
    /// Density reached at `max_size`.
    pub dpi: AxisDpi,
    /// Every standard size up to and including `max_size`, smallest first.
    pub printable_sizes: Vec<StandardSize>,
}

/// Validates uploads against one immutable configuration.
///
/// Holds no per-image state, so a single checker can serve many runs, on any
/// number of threads.
#[derive(Debug, Clone, Default)]
pub struct ImageChecker {
    config: CheckerConfig,
}

impl ImageChecker {
    /// Create a checker after validating `config`.
    pub fn new(config: CheckerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Check raw upload bytes and return the printable standard sizes,
    /// smallest first.
    pub fn check_image(&self, data: &[u8]) -> Result<Vec<StandardSize>> {
        self.inspect(data).map(|report| report.printable_sizes)
    }

    /// Check raw upload bytes and return the full report.
    #[instrument(skip(self, data), fields(data_len = data.len()))]
    pub fn inspect(&self, data: &[u8]) -> Result<CheckReport> {
        let image = raster::decode(data)?;
        self.inspect_image(image)
    }

    /// Run orientation and every rule on an already-decoded image.
    pub fn inspect_image(&self, image: Image) -> Result<CheckReport> {
        let Normalized { image, rotated } = raster::normalize(image);
        let dimensions = image.dimensions();

        let ratio =
            check_aspect_ratio(dimensions, &self.config.aspect_ratios).map_err(rejected)?;
        debug!(ratio = %format_hundredths(ratio), "Aspect ratio accepted");

        let profile_description =
            check_color_profile(image.color_profile(), &self.config.profile_descriptions)
                .map_err(rejected)?;

        let sizes = PrintSizeResolver::new(&self.config)
            .resolve(dimensions)
            .map_err(rejected)?;

        info!(
            width = dimensions.width_px,
            height = dimensions.height_px,
            max_size = %sizes.max_size,
            "Image is printable"
        );
        Ok(CheckReport {
            dimensions,
            rotated,
            aspect_ratio: format_hundredths(ratio),
            profile_description,
            max_size: sizes.max_size,
            dpi: sizes.dpi,
            printable_sizes: sizes.sizes,
        })
    }
}

fn rejected(err: CheckError) -> PrintReadyError {
    warn!(rule = ?err.rule, message = %err.message, "Check failed");
    err.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{jpeg_bytes, minimal_profile};
    use image::DynamicImage;
    use printready_core::CheckRule;

    fn srgb() -> Vec<u8> {
        minimal_profile("sRGB IEC61966-2.1")
    }

    fn rule_of(result: Result<CheckReport>) -> CheckRule {
        match result {
            Err(PrintReadyError::Check(err)) => err.rule,
            other => panic!("expected a check failure, got {other:?}"),
        }
    }

    #[test]
    fn standard_square_image_prints_at_smallest_size() {
        let image = Image::new(DynamicImage::new_luma8(2436, 2436), Some(srgb()));
        let report = ImageChecker::default().inspect_image(image).unwrap();
        assert_eq!(report.printable_sizes, vec![StandardSize::new(20, 20)]);
        assert_eq!(report.aspect_ratio, "1.0");
        assert!(!report.rotated);
    }

    #[test]
    fn wrong_ratio_is_reported_before_missing_profile() {
        let image = Image::new(DynamicImage::new_luma8(10, 20), None);
        let result = ImageChecker::default().inspect_image(image);
        assert_eq!(rule_of(result), CheckRule::AspectRatio);
    }

    #[test]
    fn missing_profile_is_reported_before_resolution() {
        // Landscape 3:2 is rotated to 2:3, then stops at the profile.
        let image = Image::new(DynamicImage::new_luma8(30, 20), None);
        let result = ImageChecker::default().inspect_image(image);
        assert_eq!(rule_of(result), CheckRule::ProfileMissing);
    }

    #[test]
    fn tiny_jpeg_is_not_printable() {
        let bytes = jpeg_bytes(1, 1, Some(&srgb())).unwrap();
        match ImageChecker::default().check_image(&bytes) {
            Err(PrintReadyError::Check(err)) => {
                assert_eq!(err.rule, CheckRule::PrintSize);
                let detail = err.detail();
                assert!(detail.contains("not printable on standard sizes"));
                assert!(detail.contains("1px x 1px"));
            }
            other => panic!("expected a print size failure, got {other:?}"),
        }
    }

    #[test]
    fn adobe_rgb_jpeg_is_rejected() {
        let bytes = jpeg_bytes(20, 30, Some(&minimal_profile("Adobe RGB (1998)"))).unwrap();
        match ImageChecker::default().check_image(&bytes) {
            Err(PrintReadyError::Check(err)) => {
                assert_eq!(err.rule, CheckRule::ProfileMismatch);
                assert!(err.message.contains("(Adobe RGB (1998))"));
                assert!(err.message.contains(r#"["sRGB IEC61966-2.1"]"#));
            }
            other => panic!("expected a profile mismatch, got {other:?}"),
        }
    }

    #[test]
    fn corrupt_upload_is_a_file_error() {
        let result = ImageChecker::default().check_image(b"GIF89a but not really");
        assert!(matches!(result, Err(PrintReadyError::ImageFile(_))));
    }

    #[test]
    fn landscape_jpeg_passes_with_reduced_density() {
        let config = CheckerConfig {
            min_dpi: 30,
            ..Default::default()
        };
        let checker = ImageChecker::new(config).unwrap();
        let bytes = jpeg_bytes(356, 237, Some(&srgb())).unwrap();

        let report = checker.inspect(&bytes).unwrap();
        assert!(report.rotated);
        assert_eq!(report.dimensions, PixelDimensions::new(237, 356));
        // 25x25 cm: 24 + 36 dpi reaches 2 * 30 although one axis is short.
        assert_eq!(report.max_size, StandardSize::new(25, 25));
        assert_eq!(report.dpi, AxisDpi { x: 24, y: 36 });
        assert_eq!(report.printable_sizes.len(), 5);
        assert_eq!(report.profile_description, "sRGB IEC61966-2.1");
    }

    #[test]
    fn repeated_runs_on_same_bytes_agree() {
        let checker = ImageChecker::default();
        let passing = jpeg_bytes(1, 1, Some(&srgb())).unwrap();
        let first = checker.check_image(&passing).map_err(|e| e.to_string());
        let second = checker.check_image(&passing).map_err(|e| e.to_string());
        assert_eq!(first, second);

        let image = || Image::new(DynamicImage::new_luma8(2361, 2361), Some(srgb()));
        assert_eq!(
            checker.inspect_image(image()).unwrap(),
            checker.inspect_image(image()).unwrap()
        );
    }

    #[test]
    fn invalid_config_is_refused() {
        let config = CheckerConfig {
            profile_descriptions: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            ImageChecker::new(config),
            Err(PrintReadyError::Config(_))
        ));
    }
}
