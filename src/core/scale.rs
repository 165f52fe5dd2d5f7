use serde::{Deserialize, Serialize};

use crate::core::types::{PlotGeometry, ResolvedDomain};
use crate::error::AxisResult;

/// Linear value -> pixel mapping for a vertical axis.
///
/// Pixels are plot-relative and grow downwards: `domain.max` maps to `0`
/// (top of the plot) and `domain.min` maps to `plot_height` (bottom).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalScale {
    domain: ResolvedDomain,
    plot_height: f64,
}

impl VerticalScale {
    #[must_use]
    pub fn new(domain: ResolvedDomain, plot_height: f64) -> Self {
        Self {
            domain,
            plot_height,
        }
    }

    /// Builds a scale spanning the full height of a validated plot.
    pub fn for_plot(domain: ResolvedDomain, plot: PlotGeometry) -> AxisResult<Self> {
        let plot = plot.validate()?;
        Ok(Self::new(domain, plot.height))
    }

    #[must_use]
    pub fn domain(self) -> ResolvedDomain {
        self.domain
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.plot_height
    }

    /// Maps a data value to a plot-relative y pixel.
    ///
    /// A collapsed domain maps every value to the bottom of the plot.
    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        let span = self.domain.span();
        if span == 0.0 {
            return self.plot_height;
        }
        let normalized = (value - self.domain.min) / span;
        self.plot_height - normalized * self.plot_height
    }

    /// Maps a plot-relative y pixel back to a data value.
    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        if self.plot_height == 0.0 {
            return self.domain.min;
        }
        let normalized = (self.plot_height - pixel) / self.plot_height;
        self.domain.min + normalized * self.domain.span()
    }
}
