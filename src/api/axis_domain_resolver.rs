use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::nice::nice_round_up;
use crate::core::ticks::{DEFAULT_TICK_COUNT_HINT, evenly_spaced_ticks, nice_ticks};
use crate::core::{DataExtent, ResolvedDomain};

use super::AxisConfig;

/// Why a resolution collapsed to a single tick.
///
/// These are recovered locally; they never surface as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DegenerateDomainCondition {
    /// Smart axis: the lower bound reaches the data max (override `min` at or
    /// above the data, or every data value equal).
    LowerBoundAtDataMax,
    /// Override `max` at or below the lower bound.
    MaxBelowLowerBound,
    /// Generic axis: override `min` above the upper bound.
    MinAboveUpperBound,
    /// Generic axis over flat data without overrides.
    FlatDomain,
}

/// Domain plus raw tick values, ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainResolution {
    pub domain: ResolvedDomain,
    pub tick_values: Vec<f64>,
    pub condition: Option<DegenerateDomainCondition>,
}

impl DomainResolution {
    fn collapsed(value: f64, condition: DegenerateDomainCondition) -> Self {
        debug!(value, ?condition, "axis domain collapsed to a single tick");
        Self {
            domain: ResolvedDomain::point(value),
            tick_values: vec![value],
            condition: Some(condition),
        }
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.condition.is_some()
    }
}

/// Merges the data extent with the config overrides into a domain and tick values.
///
/// Pure: identical inputs always produce identical output.
#[must_use]
pub fn resolve_domain(extent: DataExtent, config: &AxisConfig) -> DomainResolution {
    let resolution = if config.smart_axis {
        resolve_smart(extent, config)
    } else {
        resolve_generic(extent, config)
    };
    trace!(
        data_min = extent.min,
        data_max = extent.max,
        smart_axis = config.smart_axis,
        domain_min = resolution.domain.min,
        domain_max = resolution.domain.max,
        tick_count = resolution.tick_values.len(),
        "resolved axis domain"
    );
    resolution
}

/// Smart policy: ticks at the lower bound, the data max and a nice upper bound.
fn resolve_smart(extent: DataExtent, config: &AxisConfig) -> DomainResolution {
    let lower = config.min.unwrap_or(extent.min);

    let upper = match config.max {
        Some(max) if max <= lower => {
            return DomainResolution::collapsed(
                max,
                DegenerateDomainCondition::MaxBelowLowerBound,
            );
        }
        Some(max) => max,
        None if lower >= extent.max => {
            return DomainResolution::collapsed(
                lower,
                DegenerateDomainCondition::LowerBoundAtDataMax,
            );
        }
        None => nice_round_up(extent.max),
    };

    let domain = ResolvedDomain::new(lower, upper);
    let mut candidates: SmallVec<[f64; 3]> = SmallVec::new();
    candidates.extend(
        [lower, extent.max, upper]
            .into_iter()
            .filter(|value| domain.contains(*value)),
    );
    candidates.sort_by_key(|value| OrderedFloat(*value));
    candidates.dedup_by_key(|value| OrderedFloat(*value));

    DomainResolution {
        domain,
        tick_values: candidates.into_vec(),
        condition: None,
    }
}

/// Generic policy: overrides or data bounds, evenly spaced or nice ticks.
fn resolve_generic(extent: DataExtent, config: &AxisConfig) -> DomainResolution {
    let lower = config.min.unwrap_or(extent.min);
    let upper = config.max.unwrap_or(extent.max);

    if lower > upper {
        return match config.max {
            Some(max) => {
                DomainResolution::collapsed(max, DegenerateDomainCondition::MaxBelowLowerBound)
            }
            None => {
                DomainResolution::collapsed(lower, DegenerateDomainCondition::MinAboveUpperBound)
            }
        };
    }
    if lower == upper {
        return DomainResolution::collapsed(lower, DegenerateDomainCondition::FlatDomain);
    }

    let domain = ResolvedDomain::new(lower, upper);
    let tick_values = match config.ticks {
        Some(tick_count) => evenly_spaced_ticks(domain, tick_count),
        None => nice_ticks(domain, DEFAULT_TICK_COUNT_HINT),
    };

    DomainResolution {
        domain,
        tick_values,
        condition: None,
    }
}
