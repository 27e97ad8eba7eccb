use serde::Serialize;

use crate::error::{ChartError, ChartResult};

use super::ChartConfiguration;

pub const CHART_CONFIGURATION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfigurationJsonContractV1<'a> {
    pub schema_version: u32,
    pub configuration: &'a ChartConfiguration,
}

impl ChartConfiguration {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart configuration: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigurationJsonContractV1 {
            schema_version: CHART_CONFIGURATION_JSON_SCHEMA_V1,
            configuration: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to serialize chart configuration contract v1: {e}"
            ))
        })
    }
}
