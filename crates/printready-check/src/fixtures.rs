// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Synthetic uploads for tests and benchmarks: minimal ICC profiles that carry
// only a description tag, and JPEGs with an optional embedded profile.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, ImageResult, Rgb, RgbImage};

use crate::icc::HEADER_LEN;

/// Build a minimal ICC v2 display profile whose only tag is a
/// `textDescriptionType` description.
pub fn minimal_profile(description: &str) -> Vec<u8> {
    let mut tag = Vec::new();
    tag.extend_from_slice(b"desc");
    tag.extend_from_slice(&[0; 4]);
    tag.extend_from_slice(&(description.len() as u32 + 1).to_be_bytes());
    tag.extend_from_slice(description.as_bytes());
    tag.push(0);
    // Empty Unicode and ScriptCode descriptions.
    tag.extend_from_slice(&[0; 4 + 4 + 2 + 1 + 67]);

    assemble(0x02, 0x10, tag)
}

/// Build a minimal ICC v4 display profile whose description is a
/// `multiLocalizedUnicodeType` with one record per `(language, country, text)`.
pub fn minimal_profile_v4(records: &[(&str, &str, &str)]) -> Vec<u8> {
    let encoded: Vec<Vec<u8>> = records
        .iter()
        .map(|(_, _, text)| text.encode_utf16().flat_map(u16::to_be_bytes).collect())
        .collect();

    let mut tag = Vec::new();
    tag.extend_from_slice(b"mluc");
    tag.extend_from_slice(&[0; 4]);
    tag.extend_from_slice(&(records.len() as u32).to_be_bytes());
    tag.extend_from_slice(&12u32.to_be_bytes());

    let mut offset = 16 + records.len() * 12;
    for ((language, country, _), text) in records.iter().zip(&encoded) {
        tag.extend_from_slice(&language.as_bytes()[..2]);
        tag.extend_from_slice(&country.as_bytes()[..2]);
        tag.extend_from_slice(&(text.len() as u32).to_be_bytes());
        tag.extend_from_slice(&(offset as u32).to_be_bytes());
        offset += text.len();
    }
    for text in &encoded {
        tag.extend_from_slice(text);
    }

    assemble(0x04, 0x30, tag)
}

/// Header, a one-entry tag table, then the description tag.
fn assemble(major: u8, minor: u8, tag: Vec<u8>) -> Vec<u8> {
    let tag_offset = HEADER_LEN + 4 + 12;

    let mut profile = vec![0u8; HEADER_LEN];
    profile[8] = major;
    profile[9] = minor;
    profile[12..16].copy_from_slice(b"mntr");
    profile[16..20].copy_from_slice(b"RGB ");
    profile[20..24].copy_from_slice(b"XYZ ");
    profile[36..40].copy_from_slice(b"acsp");

    profile.extend_from_slice(&1u32.to_be_bytes());
    profile.extend_from_slice(b"desc");
    profile.extend_from_slice(&(tag_offset as u32).to_be_bytes());
    profile.extend_from_slice(&(tag.len() as u32).to_be_bytes());
    profile.extend_from_slice(&tag);

    // Tags are 4-byte aligned.
    while profile.len() % 4 != 0 {
        profile.push(0);
    }
    let size = profile.len() as u32;
    profile[0..4].copy_from_slice(&size.to_be_bytes());
    profile
}

/// Encode a flat grey `width` x `height` JPEG, embedding `profile` if given.
pub fn jpeg_bytes(width: u32, height: u32, profile: Option<&[u8]>) -> ImageResult<Vec<u8>> {
    let pixels = RgbImage::from_pixel(width, height, Rgb([128, 128, 128]));

    let mut buffer = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buffer, 90);
    if let Some(profile) = profile {
        encoder
            .set_icc_profile(profile.to_vec())
            .map_err(ImageError::Unsupported)?;
    }
    encoder.write_image(pixels.as_raw(), width, height, ExtendedColorType::Rgb8)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_size_field_matches_length() {
        let profile = minimal_profile("sRGB IEC61966-2.1");
        let declared = u32::from_be_bytes([profile[0], profile[1], profile[2], profile[3]]);
        assert_eq!(declared as usize, profile.len());
        assert_eq!(profile.len() % 4, 0);
    }

    #[test]
    fn jpeg_starts_with_soi_marker() {
        let bytes = jpeg_bytes(4, 4, None).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }
}
