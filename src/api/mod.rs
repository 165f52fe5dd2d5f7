mod axis_config;
mod axis_domain_resolver;
mod json_contract;
mod tick_label_format;
mod tick_set;
mod y_axis;

pub use axis_config::{AxisConfig, AxisLabelsConfig, LabelAlign};
pub use axis_domain_resolver::{DegenerateDomainCondition, DomainResolution, resolve_domain};
pub use json_contract::{AXIS_FRAME_JSON_SCHEMA_V1, AxisFrameJsonContractV1};
pub use tick_label_format::{TickLabelFormatterFn, default_tick_label, format_tick_labels};
pub use tick_set::{Tick, TickSet, build_tick_set};
pub use y_axis::{AxisFrame, YAxis};
