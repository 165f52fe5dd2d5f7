use thiserror::Error;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("no data values to derive an axis extent from")]
    EmptyData,

    #[error("invalid plot geometry: left={left}, top={top}, width={width}, height={height}")]
    InvalidPlotGeometry {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    },

    #[error("axis has not been rendered yet")]
    NotRendered,

    #[error("invalid axis config: {0}")]
    InvalidConfig(String),
}
