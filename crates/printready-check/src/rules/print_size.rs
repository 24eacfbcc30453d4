// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Print-size resolver — finds the largest catalog size an image can fill at
// the minimum density, and the catalog prefix up to it.
//
// Density per axis is `pixels / inches`, each rounded to the nearest integer
// (ties to even). A size qualifies when both axes together reach
// `2 * min_dpi`, so a strong axis can make up for a weak one.

use printready_core::{
    AxisDpi, CheckError, CheckRule, CheckerConfig, PixelDimensions, StandardSize,
};
use serde::Serialize;
use tracing::debug;

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintSizeReport {
    /// The largest qualifying catalog size.
    pub max_size: StandardSize,
    /// Density achieved at `max_size`.
    pub dpi: AxisDpi,
    /// Every catalog size up to and including `max_size`, in catalog order.
    pub sizes: Vec<StandardSize>,
}

/// Walks the configured size catalog for one image.
pub struct PrintSizeResolver<'a> {
    config: &'a CheckerConfig,
}

impl<'a> PrintSizeResolver<'a> {
    pub fn new(config: &'a CheckerConfig) -> Self {
        Self { config }
    }

    /// Density an image of `dimensions` reaches when printed at `size`.
    pub fn dpi_at(&self, dimensions: PixelDimensions, size: StandardSize) -> AxisDpi {
        let (width_in, height_in) = size.to_inches(self.config.cm_per_inch);
        AxisDpi {
            x: (dimensions.width_px as f64 / width_in).round_ties_even() as u64,
            y: (dimensions.height_px as f64 / height_in).round_ties_even() as u64,
        }
    }

    /// Whether `dpi` is dense enough to print.
    pub fn is_dense_enough(&self, dpi: AxisDpi) -> bool {
        dpi.combined() >= 2 * self.config.min_dpi as u64
    }

    /// Catalog index, size, and density of the largest qualifying size.
    ///
    /// The catalog is walked from its last entry to its first and the first
    /// hit wins, so ties favour the larger print.
    fn find_max(
        &self,
        dimensions: PixelDimensions,
    ) -> Result<(usize, StandardSize, AxisDpi), CheckError> {
        for (index, size) in self.config.standard_sizes.iter().enumerate().rev() {
            let dpi = self.dpi_at(dimensions, *size);
            if self.is_dense_enough(dpi) {
                debug!(%size, dpi_x = dpi.x, dpi_y = dpi.y, "Max print size found");
                return Ok((index, *size, dpi));
            }
        }

        Err(CheckError::new(
            CheckRule::PrintSize,
            "The image is not printable on standard sizes.",
        )
        .with_hint(format!(
            "You may upload an image with higher resolution, the current resolution is: {dimensions}."
        )))
    }

    /// The largest catalog size printable at the minimum density.
    pub fn max_print_size(&self, dimensions: PixelDimensions) -> Result<StandardSize, CheckError> {
        self.find_max(dimensions).map(|(_, size, _)| size)
    }

    /// Every catalog entry up to and including `max_size`. Empty when
    /// `max_size` is not in the catalog.
    ///
    /// A repeated entry is matched at its last position, the same one the
    /// descending walk in [`Self::resolve`] stops at.
    pub fn print_sizes(&self, max_size: StandardSize) -> &'a [StandardSize] {
        match self.config.standard_sizes.iter().rposition(|s| *s == max_size) {
            Some(index) => self.prefix(index),
            None => &[],
        }
    }

    fn prefix(&self, index: usize) -> &'a [StandardSize] {
        &self.config.standard_sizes[..=index]
    }

    /// Find the maximal size and every size below it.
    pub fn resolve(&self, dimensions: PixelDimensions) -> Result<PrintSizeReport, CheckError> {
        let (index, max_size, dpi) = self.find_max(dimensions)?;
        Ok(PrintSizeReport {
            max_size,
            dpi,
            sizes: self.prefix(index).to_vec(),
        })
    }
}
