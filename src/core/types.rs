use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// One `{x, y}` sample of a series. Only `y` feeds the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Values of one series, either plain numbers or `{x, y}` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesData {
    Values(Vec<f64>),
    Points(Vec<DataPoint>),
}

impl SeriesData {
    /// Iterates the values plotted against the y axis.
    pub fn y_values(&self) -> impl Iterator<Item = f64> + '_ {
        let (values, points): (&[f64], &[DataPoint]) = match self {
            Self::Values(values) => (values, &[]),
            Self::Points(points) => (&[], points),
        };
        values
            .iter()
            .copied()
            .chain(points.iter().map(|point| point.y))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Values(values) => values.len(),
            Self::Points(points) => points.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for SeriesData {
    fn from(values: Vec<f64>) -> Self {
        Self::Values(values)
    }
}

impl From<&[f64]> for SeriesData {
    fn from(values: &[f64]) -> Self {
        Self::Values(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for SeriesData {
    fn from(values: [f64; N]) -> Self {
        Self::Values(values.to_vec())
    }
}

impl From<Vec<DataPoint>> for SeriesData {
    fn from(points: Vec<DataPoint>) -> Self {
        Self::Points(points)
    }
}

/// Raw `[min, max]` envelope of every value plotted on the axis.
///
/// Values are not validated: a NaN sample is skipped by the min/max fold once a
/// number has been seen, and an all-NaN input yields NaN bounds. A NaN extent
/// resolves to a smart axis with no ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataExtent {
    pub min: f64,
    pub max: f64,
}

impl DataExtent {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Scans a value sequence. Fails only when the sequence is empty.
    pub fn from_values<I>(values: I) -> AxisResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter();
        let Some(first) = values.next() else {
            return Err(AxisError::EmptyData);
        };

        Ok(values.fold(Self::new(first, first), |extent, value| Self {
            min: extent.min.min(value),
            max: extent.max.max(value),
        }))
    }

    /// Merges the y values of every series into one extent.
    pub fn from_series<'a, I>(series: I) -> AxisResult<Self>
    where
        I: IntoIterator<Item = &'a SeriesData>,
    {
        Self::from_values(series.into_iter().flat_map(SeriesData::y_values))
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }
}

/// Final axis bounds after overrides and nice rounding. Always `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDomain {
    pub min: f64,
    pub max: f64,
}

impl ResolvedDomain {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Collapsed single-value domain used when overrides conflict with the data.
    #[must_use]
    pub fn point(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_point(self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Plot area inside the chart container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for PlotGeometry {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 400.0,
            height: 300.0,
        }
    }
}

impl PlotGeometry {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn validate(self) -> AxisResult<Self> {
        let finite = self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        if !finite || self.width < 0.0 || self.height <= 0.0 {
            return Err(AxisError::InvalidPlotGeometry {
                left: self.left,
                top: self.top,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Converts a plot-relative y pixel into container coordinates.
    #[must_use]
    pub fn absolute_y(self, plot_y: f64) -> f64 {
        self.top + plot_y
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}
