// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Orientation normaliser. The size catalog lists the short side first, so a
// landscape upload is turned a quarter turn before any check looks at it.

use tracing::debug;

use super::Image;

/// An image guaranteed to satisfy `width <= height`.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub image: Image,
    /// Whether a rotation was applied.
    pub rotated: bool,
}

/// Rotate a landscape image by 90° counter-clockwise; portrait and square
/// images pass through untouched.
pub fn normalize(image: Image) -> Normalized {
    if image.dimensions().is_portrait_or_square() {
        return Normalized {
            image,
            rotated: false,
        };
    }

    let (pixels, color_profile) = image.into_parts();
    debug!(
        from_w = pixels.width(),
        from_h = pixels.height(),
        "Rotating landscape image"
    );
    Normalized {
        image: Image::new(pixels.rotate270(), color_profile),
        rotated: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    #[test]
    fn landscape_is_rotated_and_dimensions_swapped() {
        let image = Image::new(DynamicImage::new_rgb8(300, 200), Some(vec![1, 2, 3]));
        let out = normalize(image);
        assert!(out.rotated);
        assert_eq!((out.image.width(), out.image.height()), (200, 300));
        assert_eq!(out.image.color_profile(), Some([1u8, 2, 3].as_slice()));
    }

    #[test]
    fn portrait_is_untouched() {
        let out = normalize(Image::new(DynamicImage::new_rgb8(200, 300), None));
        assert!(!out.rotated);
        assert_eq!((out.image.width(), out.image.height()), (200, 300));
    }

    #[test]
    fn square_is_untouched() {
        let out = normalize(Image::new(DynamicImage::new_rgb8(50, 50), None));
        assert!(!out.rotated);
    }

    #[test]
    fn width_never_exceeds_height_afterwards() {
        for (w, h) in [(1, 2), (2, 1), (7, 7), (640, 480), (480, 640), (33, 1)] {
            let out = normalize(Image::new(DynamicImage::new_luma8(w, h), None));
            assert!(out.image.width() <= out.image.height(), "{w}x{h}");
        }
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        // Mark the top-right pixel; a counter-clockwise quarter turn moves it
        // to the top-left.
        let mut buf = image::GrayImage::new(3, 2);
        buf.put_pixel(2, 0, image::Luma([255]));
        let out = normalize(Image::new(DynamicImage::ImageLuma8(buf), None));
        let rotated = out.image.as_dynamic().to_luma8();
        assert_eq!(rotated.get_pixel(0, 0), &image::Luma([255]));
    }
}
