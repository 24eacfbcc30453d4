// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Decoder — turns uploaded bytes into an in-memory raster and pulls out the
// embedded ICC profile. The container format is guessed from the content,
// never from the file name.

use std::io::Cursor;

use image::{DynamicImage, ImageDecoder, ImageReader};
use printready_core::error::{PrintReadyError, Result};
use tracing::{debug, instrument};

use super::Image;

/// Decode raw encoded bytes (JPEG, TIFF, etc.) into an [`Image`].
///
/// Any failure here means the bytes are not a usable image and is reported as
/// [`PrintReadyError::ImageFile`].
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn decode(data: &[u8]) -> Result<Image> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|err| file_error("failed to read image", err))?;

    let mut decoder = reader
        .into_decoder()
        .map_err(|err| file_error("unsupported or corrupt image", err))?;

    let color_profile = decoder
        .icc_profile()
        .map_err(|err| file_error("failed to read embedded profile", err))?;

    let pixels = DynamicImage::from_decoder(decoder)
        .map_err(|err| file_error("failed to decode image", err))?;

    if pixels.width() == 0 || pixels.height() == 0 {
        return Err(PrintReadyError::ImageFile(format!(
            "image has no pixels ({}x{})",
            pixels.width(),
            pixels.height()
        )));
    }

    debug!(
        width = pixels.width(),
        height = pixels.height(),
        has_profile = color_profile.as_ref().is_some_and(|p| !p.is_empty()),
        "Image decoded from bytes"
    );
    Ok(Image::new(pixels, color_profile))
}

fn file_error(context: &str, err: impl std::fmt::Display) -> PrintReadyError {
    PrintReadyError::ImageFile(format!("{context}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{jpeg_bytes, minimal_profile};

    #[test]
    fn garbage_bytes_are_a_file_error() {
        let result = decode(b"definitely not an image");
        assert!(matches!(result, Err(PrintReadyError::ImageFile(_))));
    }

    #[test]
    fn empty_input_is_a_file_error() {
        assert!(matches!(decode(&[]), Err(PrintReadyError::ImageFile(_))));
    }

    #[test]
    fn jpeg_magic_without_body_is_a_file_error() {
        let bytes = jpeg_bytes(16, 16, None).unwrap();
        let result = decode(&bytes[..4]);
        assert!(matches!(result, Err(PrintReadyError::ImageFile(_))));
    }

    #[test]
    fn jpeg_without_profile_decodes() {
        let bytes = jpeg_bytes(30, 20, None).unwrap();
        let image = decode(&bytes).unwrap();
        assert_eq!((image.width(), image.height()), (30, 20));
        assert!(image.color_profile().is_none());
    }

    #[test]
    fn jpeg_profile_is_extracted_verbatim() {
        let profile = minimal_profile("sRGB IEC61966-2.1");
        let bytes = jpeg_bytes(8, 8, Some(&profile)).unwrap();
        let image = decode(&bytes).unwrap();
        assert_eq!(image.color_profile(), Some(profile.as_slice()));
    }
}
