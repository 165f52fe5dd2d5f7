use serde::{Deserialize, Serialize};

use crate::core::VerticalScale;

use super::{AxisConfig, DomainResolution, LabelAlign, format_tick_labels};

/// One labeled tick; `position` is the plot-relative y pixel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
    pub position: f64,
}

/// Ticks in ascending value order (bottom to top of the axis) with the label
/// alignment shared by all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TickSet {
    pub ticks: Vec<Tick>,
    pub align: LabelAlign,
}

impl TickSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// SVG `dy` applied to every label of the set.
    #[must_use]
    pub fn label_dy(&self) -> &'static str {
        self.align.dy()
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|tick| tick.label.as_str()).collect()
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.ticks.iter().map(|tick| tick.value).collect()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Tick> {
        self.ticks.first()
    }

    /// Top-most tick.
    #[must_use]
    pub fn last(&self) -> Option<&Tick> {
        self.ticks.last()
    }
}

/// Labels and positions the tick values of a resolution.
#[must_use]
pub fn build_tick_set(
    resolution: &DomainResolution,
    config: &AxisConfig,
    scale: VerticalScale,
) -> TickSet {
    let values = resolution.tick_values.as_slice();
    let labels = format_tick_labels(values, config.labels.formatter.as_ref());
    let ticks = values
        .iter()
        .zip(labels)
        .map(|(value, label)| Tick {
            value: *value,
            label,
            position: scale.value_to_pixel(*value),
        })
        .collect();

    TickSet {
        ticks,
        align: config.labels.align,
    }
}
