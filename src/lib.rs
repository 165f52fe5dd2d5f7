//! narwhal-axis: smart y-axis domain and tick resolution.
//!
//! Given the data plotted on a vertical axis and the user's axis options, this
//! crate picks the axis bounds, the tick values, their labels and pixel
//! positions. Drawing the axis is left to the host renderer.
//!
//! ```
//! use narwhal_axis::api::{AxisConfig, YAxis};
//! use narwhal_axis::core::PlotGeometry;
//!
//! let mut axis = YAxis::new(AxisConfig::default(), PlotGeometry::default())?;
//! axis.set_data([[0.0, 10.0, 20.0, 30.0]]);
//! let frame = axis.render()?;
//! assert_eq!(frame.ticks.labels(), vec!["0", "30", "33"]);
//! # Ok::<(), narwhal_axis::AxisError>(())
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{AxisConfig, AxisFrame, YAxis, resolve_domain};
pub use error::{AxisError, AxisResult};
