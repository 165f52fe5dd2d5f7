pub mod nice;
pub mod scale;
pub mod ticks;
pub mod types;

pub use nice::{nice_round_up, tick_increment};
pub use scale::VerticalScale;
pub use ticks::{DEFAULT_TICK_COUNT_HINT, MAX_GENERATED_TICKS, evenly_spaced_ticks, nice_ticks};
pub use types::{DataExtent, DataPoint, PlotGeometry, ResolvedDomain, SeriesData};
