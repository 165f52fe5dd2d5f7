use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

use super::AxisFrame;

pub const AXIS_FRAME_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: AxisFrame,
}

impl AxisFrame {
    pub fn to_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AxisError::InvalidConfig(format!("failed to serialize axis frame json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> AxisResult<String> {
        let payload = AxisFrameJsonContractV1 {
            schema_version: AXIS_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AxisError::InvalidConfig(format!("failed to serialize axis frame contract v1: {e}"))
        })
    }

    /// Accepts either a bare frame or the versioned v1 envelope.
    pub fn from_json_compat_str(input: &str) -> AxisResult<Self> {
        if let Ok(frame) = serde_json::from_str::<AxisFrame>(input) {
            return Ok(frame);
        }
        let payload: AxisFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            AxisError::InvalidConfig(format!("failed to parse axis frame json payload: {e}"))
        })?;
        if payload.schema_version != AXIS_FRAME_JSON_SCHEMA_V1 {
            return Err(AxisError::InvalidConfig(format!(
                "unsupported axis frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}
