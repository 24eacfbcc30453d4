// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Print-readiness rules. Each rule is a pure function of the image data and
// the configuration, returning a `CheckError` on failure.

pub mod aspect_ratio;
pub mod color_profile;
pub mod print_size;

pub use aspect_ratio::check_aspect_ratio;
pub use color_profile::check_color_profile;
pub use print_size::PrintSizeResolver;
