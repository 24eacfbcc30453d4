// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ICC profile reader — just enough of ICC.1 to pull out the human-readable
// profile description.
//
// The 128-byte header is followed by a tag table (count, then 12-byte entries
// of signature/offset/size). The description lives in the `desc` tag, encoded
// either as a v2 `textDescriptionType` (ASCII) or a v4
// `multiLocalizedUnicodeType` (UTF-16BE records).

use thiserror::Error;

/// Size of the fixed profile header.
pub const HEADER_LEN: usize = 128;

/// Profile file signature at bytes 36..40.
pub const PROFILE_SIGNATURE: &[u8; 4] = b"acsp";

/// Tag signature of the profile description.
pub const DESCRIPTION_TAG: &[u8; 4] = b"desc";

const TAG_ENTRY_LEN: usize = 12;
const MLUC_RECORD_MIN_LEN: usize = 12;

/// Why a profile description could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IccError {
    #[error("profile is {0} bytes, shorter than its header")]
    TooSmall(usize),

    #[error("profile signature is not 'acsp'")]
    BadSignature,

    #[error("profile has no description")]
    NoDescription,

    #[error("profile is truncated in the {0}")]
    Truncated(&'static str),

    #[error("unsupported description type '{0}'")]
    UnsupportedType(String),
}

/// Extract the profile description from raw ICC bytes.
pub fn profile_description(data: &[u8]) -> Result<String, IccError> {
    if data.len() < HEADER_LEN {
        return Err(IccError::TooSmall(data.len()));
    }
    if &data[36..40] != PROFILE_SIGNATURE {
        return Err(IccError::BadSignature);
    }

    let tag_count = read_u32(data, HEADER_LEN).ok_or(IccError::Truncated("tag count"))?;
    let table = HEADER_LEN + 4;

    for index in 0..tag_count as usize {
        let entry = table + index * TAG_ENTRY_LEN;
        let signature = data
            .get(entry..entry + 4)
            .ok_or(IccError::Truncated("tag table"))?;
        if signature != DESCRIPTION_TAG {
            continue;
        }

        let offset = read_u32(data, entry + 4).ok_or(IccError::Truncated("tag table"))? as usize;
        let size = read_u32(data, entry + 8).ok_or(IccError::Truncated("tag table"))? as usize;
        let tag = slice(data, offset, size).ok_or(IccError::Truncated("description tag"))?;
        return read_text(tag);
    }

    Err(IccError::NoDescription)
}

/// Decode a description tag according to its type signature.
fn read_text(tag: &[u8]) -> Result<String, IccError> {
    let type_sig = tag.get(0..4).ok_or(IccError::Truncated("description tag"))?;
    match type_sig {
        b"desc" => read_text_description(tag),
        b"mluc" => read_multi_localized(tag),
        other => Err(IccError::UnsupportedType(
            String::from_utf8_lossy(other).into_owned(),
        )),
    }
}

/// v2 `textDescriptionType`: type(4) reserved(4) count(4) ASCII(count, NUL-terminated).
fn read_text_description(tag: &[u8]) -> Result<String, IccError> {
    let count = read_u32(tag, 8).ok_or(IccError::Truncated("description tag"))? as usize;
    let ascii = slice(tag, 12, count).ok_or(IccError::Truncated("description text"))?;
    let end = ascii.iter().position(|&b| b == 0).unwrap_or(ascii.len());
    Ok(ascii[..end].iter().copied().map(char::from).collect())
}

/// v4 `multiLocalizedUnicodeType`: prefers the en-US record, else the first.
fn read_multi_localized(tag: &[u8]) -> Result<String, IccError> {
    let records = read_u32(tag, 8).ok_or(IccError::Truncated("description tag"))? as usize;
    let record_len = read_u32(tag, 12).ok_or(IccError::Truncated("description tag"))? as usize;
    if records == 0 {
        return Err(IccError::NoDescription);
    }
    if record_len < MLUC_RECORD_MIN_LEN {
        return Err(IccError::Truncated("localized record"));
    }

    let mut chosen = None;
    for index in 0..records {
        let record = slice(tag, 16 + index * record_len, MLUC_RECORD_MIN_LEN)
            .ok_or(IccError::Truncated("localized record"))?;
        if chosen.is_none() || &record[0..4] == b"enUS" {
            chosen = Some(record);
        }
        if &record[0..4] == b"enUS" {
            break;
        }
    }
    let record = chosen.ok_or(IccError::NoDescription)?;

    let len = read_u32(record, 4).ok_or(IccError::Truncated("localized record"))? as usize;
    let offset = read_u32(record, 8).ok_or(IccError::Truncated("localized record"))? as usize;
    let utf16 = slice(tag, offset, len).ok_or(IccError::Truncated("localized text"))?;

    let units = utf16
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    let text: String = char::decode_utf16(units)
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    Ok(text.trim_end_matches('\0').to_string())
}

fn read_u32(data: &[u8], at: usize) -> Option<u32> {
    let bytes = slice(data, at, 4)?;
    Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn slice(data: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
    data.get(offset..offset.checked_add(len)?)
}
