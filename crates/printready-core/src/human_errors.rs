// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Client-facing error responses.
//
// Every error is mapped to a status code and a plain message the uploader can
// act on. Check failures keep their own wording, one line per diagnostic.

use serde::Serialize;

use crate::error::PrintReadyError;

/// HTTP-style status for problems with the upload itself.
pub const STATUS_BAD_REQUEST: u16 = 400;

/// HTTP-style status for problems on our side.
pub const STATUS_INTERNAL: u16 = 500;

/// What the uploader sees when a check run fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientResponse {
    pub status: u16,
    pub detail: String,
}

/// Convert a `PrintReadyError` into the response shown to the uploader.
pub fn client_response(err: &PrintReadyError) -> ClientResponse {
    match err {
        PrintReadyError::ImageFile(_) => ClientResponse {
            status: STATUS_BAD_REQUEST,
            detail: "The file seems incorrect.".into(),
        },

        PrintReadyError::Check(check) => ClientResponse {
            status: STATUS_BAD_REQUEST,
            detail: check.detail(),
        },

        PrintReadyError::UnsupportedExtension(allowed) => ClientResponse {
            status: STATUS_BAD_REQUEST,
            detail: format!("The file type should be one of {allowed}"),
        },

        PrintReadyError::Config(_)
        | PrintReadyError::Io(_)
        | PrintReadyError::Serialization(_) => ClientResponse {
            status: STATUS_INTERNAL,
            detail: "The image could not be checked right now.".into(),
        },
    }
}
