use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{DataExtent, PlotGeometry, ResolvedDomain, SeriesData, VerticalScale};
use crate::error::{AxisError, AxisResult};

use super::{AxisConfig, DegenerateDomainCondition, TickSet, build_tick_set, resolve_domain};

/// Everything the axis drawing routine needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisFrame {
    pub domain: ResolvedDomain,
    pub ticks: TickSet,
    pub outer_tick_size: f64,
    pub tick_padding: f64,
    pub plot: PlotGeometry,
    #[serde(default)]
    pub condition: Option<DegenerateDomainCondition>,
}

impl AxisFrame {
    #[must_use]
    pub fn scale(&self) -> VerticalScale {
        VerticalScale::new(self.domain, self.plot.height)
    }

    /// Path of the axis line with its outer ticks, left-oriented:
    /// `M-6,0H0V300H-6` for a 300px plot and the default outer tick size.
    #[must_use]
    pub fn domain_path(&self) -> String {
        let outer = -self.outer_tick_size;
        format!("M{outer},0H0V{height}H{outer}", height = self.plot.height)
    }
}

/// Stateful y axis driven by the chart controller.
///
/// Series and overrides are kept between calls; the domain and ticks are not.
/// Every [`YAxis::render`] resolves them again from the current inputs.
#[derive(Debug, Clone)]
pub struct YAxis {
    config: AxisConfig,
    plot: PlotGeometry,
    /// Insertion order is kept so auto-named series stay stable across updates.
    series: IndexMap<String, SeriesData>,
    explicit_extent: Option<DataExtent>,
    last_scale: Option<VerticalScale>,
}

impl YAxis {
    pub fn new(config: AxisConfig, plot: PlotGeometry) -> AxisResult<Self> {
        let plot = plot.validate()?;
        Ok(Self {
            config,
            plot,
            series: IndexMap::new(),
            explicit_extent: None,
            last_scale: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    #[must_use]
    pub fn plot(&self) -> PlotGeometry {
        self.plot
    }

    #[must_use]
    pub fn series(&self) -> &IndexMap<String, SeriesData> {
        &self.series
    }

    /// Replaces every series. Clears any extent set through [`YAxis::set_y_domain`].
    pub fn set_data<I, S>(&mut self, series: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<SeriesData>,
    {
        self.series = series
            .into_iter()
            .enumerate()
            .map(|(index, data)| (format!("series-{index}"), data.into()))
            .collect();
        self.explicit_extent = None;
        debug!(series_count = self.series.len(), "set axis data");
    }

    /// Inserts or replaces one named series, keeping its original position.
    pub fn set_series(&mut self, name: impl Into<String>, data: impl Into<SeriesData>) {
        let name = name.into();
        let data = data.into();
        trace!(name = %name, len = data.len(), "set axis series");
        self.series.insert(name, data);
        self.explicit_extent = None;
    }

    /// Removes one named series. Like the other series edits, this clears any
    /// extent set through [`YAxis::set_y_domain`].
    pub fn remove_series(&mut self, name: &str) -> Option<SeriesData> {
        self.explicit_extent = None;
        self.series.shift_remove(name)
    }

    /// Sets the data extent directly; series values are ignored until the next
    /// [`YAxis::set_data`] or [`YAxis::set_series`].
    pub fn set_y_domain(&mut self, extent: DataExtent) {
        debug!(min = extent.min, max = extent.max, "set axis y domain");
        self.explicit_extent = Some(extent);
    }

    pub fn set_config(&mut self, config: AxisConfig) {
        self.config = config;
    }

    pub fn set_plot(&mut self, plot: PlotGeometry) -> AxisResult<()> {
        self.plot = plot.validate()?;
        Ok(())
    }

    /// Extent the next render resolves from.
    pub fn data_extent(&self) -> AxisResult<DataExtent> {
        match self.explicit_extent {
            Some(extent) => Ok(extent),
            None => DataExtent::from_series(self.series.values()),
        }
    }

    /// Resolves domain and ticks from the current data, config and plot.
    pub fn render(&mut self) -> AxisResult<AxisFrame> {
        let extent = self.data_extent()?;
        let resolution = resolve_domain(extent, &self.config);
        let scale = VerticalScale::for_plot(resolution.domain, self.plot)?;
        let ticks = build_tick_set(&resolution, &self.config, scale);
        self.last_scale = Some(scale);

        Ok(AxisFrame {
            domain: resolution.domain,
            ticks,
            outer_tick_size: self.config.outer_tick_size,
            tick_padding: self.config.tick_padding,
            plot: self.plot,
            condition: resolution.condition,
        })
    }

    /// Scale of the most recent render.
    pub fn scale(&self) -> AxisResult<VerticalScale> {
        self.last_scale.ok_or(AxisError::NotRendered)
    }

    /// Maps a value through the most recent render's scale.
    pub fn y_scale(&self, value: f64) -> AxisResult<f64> {
        Ok(self.scale()?.value_to_pixel(value))
    }
}
