// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Color-profile rule. A missing profile, an unreadable one, and a readable
// but unaccepted one are three different failures.

use printready_core::{CheckError, CheckRule};
use tracing::debug;

use crate::icc;

/// Check that an embedded ICC profile is present and that its description
/// matches one of `accepted` exactly (case-sensitive, no trimming).
///
/// Returns the profile description on success.
pub fn check_color_profile(
    profile: Option<&[u8]>,
    accepted: &[String],
) -> Result<String, CheckError> {
    let Some(profile) = profile else {
        return Err(CheckError::new(
            CheckRule::ProfileMissing,
            "The profile of the image is missing.",
        )
        .with_hint(format!(
            "You may export your image with one of these color profiles embedded: {accepted:?}"
        )));
    };

    let description = icc::profile_description(profile).map_err(|err| {
        CheckError::new(
            CheckRule::ProfileUnreadable,
            format!("The profile of the image could not be read ({err})."),
        )
    })?;
    debug!(%description, "Embedded profile found");

    if accepted.iter().any(|a| *a == description) {
        return Ok(description);
    }

    Err(CheckError::new(
        CheckRule::ProfileMismatch,
        format!("The profile of the image ({description}) is not one of {accepted:?}"),
    ))
}
