// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster module — decoding uploaded bytes and normalising orientation.

pub mod decoder;
pub mod orientation;

use image::DynamicImage;
use printready_core::PixelDimensions;

pub use decoder::decode;
pub use orientation::{Normalized, normalize};

/// A decoded upload: pixels plus the embedded ICC profile, if any.
///
/// Each check run owns its own `Image`; nothing here is shared between runs.
#[derive(Debug, Clone)]
pub struct Image {
    pixels: DynamicImage,
    color_profile: Option<Vec<u8>>,
}

impl Image {
    /// Wrap already-decoded pixels. An empty profile blob counts as absent.
    pub fn new(pixels: DynamicImage, color_profile: Option<Vec<u8>>) -> Self {
        Self {
            pixels,
            color_profile: color_profile.filter(|p| !p.is_empty()),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> PixelDimensions {
        PixelDimensions::new(self.width(), self.height())
    }

    /// The raw embedded ICC profile.
    pub fn color_profile(&self) -> Option<&[u8]> {
        self.color_profile.as_deref()
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.pixels
    }

    pub(crate) fn into_parts(self) -> (DynamicImage, Option<Vec<u8>>) {
        (self.pixels, self.color_profile)
    }
}
