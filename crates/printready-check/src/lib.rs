// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// printready-check — Print-readiness validation engine.
//
// Decodes an uploaded image, turns it short side first, then checks its aspect
// ratio, its embedded ICC profile, and the largest standard print size it can
// fill at the minimum density. The first failing check aborts the run.

pub mod checker;
pub mod fingerprint;
pub mod fixtures;
pub mod icc;
pub mod raster;
pub mod rules;

// Re-export the primary entry points so callers can use
// `printready_check::ImageChecker` etc.
pub use checker::{CheckReport, ImageChecker};
pub use fingerprint::fingerprint;
pub use raster::Image;
pub use rules::print_size::{PrintSizeReport, PrintSizeResolver};
