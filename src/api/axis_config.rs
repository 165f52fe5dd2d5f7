use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

use super::TickLabelFormatterFn;

/// Vertical placement of a tick label relative to its tick line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LabelAlign {
    /// Label centered on the tick.
    #[default]
    Middle,
    /// Top edge of the label on the tick.
    Top,
    /// Bottom edge (baseline) of the label on the tick.
    Bottom,
}

impl LabelAlign {
    /// Baseline offset applied to every label of a tick set, as an SVG `dy` value.
    #[must_use]
    pub fn dy(self) -> &'static str {
        match self {
            Self::Middle => ".35em",
            Self::Top => ".8em",
            Self::Bottom => "0",
        }
    }

    /// Same offset as [`LabelAlign::dy`] expressed in `em` units.
    #[must_use]
    pub fn offset_em(self) -> f64 {
        match self {
            Self::Middle => 0.35,
            Self::Top => 0.8,
            Self::Bottom => 0.0,
        }
    }
}

/// Tick label options.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisLabelsConfig {
    pub align: LabelAlign,
    /// Runtime-only label override; never serialized.
    #[serde(skip)]
    pub formatter: Option<TickLabelFormatterFn>,
}

impl fmt::Debug for AxisLabelsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisLabelsConfig")
            .field("align", &self.align)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

/// User-facing y-axis options.
///
/// `min`, `max` and `ticks` are overrides; when absent the data decides. The
/// JSON form uses the camelCase option names (`smartAxis`, `outerTickSize`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisConfig {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub ticks: Option<usize>,
    pub smart_axis: bool,
    pub labels: AxisLabelsConfig,
    pub outer_tick_size: f64,
    pub tick_padding: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            ticks: None,
            smart_axis: true,
            labels: AxisLabelsConfig::default(),
            outer_tick_size: 6.0,
            tick_padding: 3.0,
        }
    }
}

impl AxisConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min(mut self, min: impl Into<Option<f64>>) -> Self {
        self.min = min.into();
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: impl Into<Option<f64>>) -> Self {
        self.max = max.into();
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: impl Into<Option<usize>>) -> Self {
        self.ticks = ticks.into();
        self
    }

    #[must_use]
    pub fn with_smart_axis(mut self, smart_axis: bool) -> Self {
        self.smart_axis = smart_axis;
        self
    }

    #[must_use]
    pub fn with_label_align(mut self, align: LabelAlign) -> Self {
        self.labels.align = align;
        self
    }

    /// Sets the label formatter, called as `formatter(value, index, all_values)`.
    #[must_use]
    pub fn with_label_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(f64, usize, &[f64]) -> String + Send + Sync + 'static,
    {
        self.labels.formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use]
    pub fn without_label_formatter(mut self) -> Self {
        self.labels.formatter = None;
        self
    }

    #[must_use]
    pub fn with_outer_tick_size(mut self, outer_tick_size: f64) -> Self {
        self.outer_tick_size = outer_tick_size;
        self
    }

    /// Loads options from JSON. Missing fields keep their defaults.
    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| AxisError::InvalidConfig(format!("failed to parse axis config: {e}")))
    }

    pub fn to_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AxisError::InvalidConfig(format!("failed to serialize axis config: {e}"))
        })
    }
}
