use axum::Json;
use neurolattice_core::error::CoreError;
use neurolattice_core::traffic::{self, TrafficUnit};
use neurolattice_core::workload::validate_non_negative;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;

/// Request body for the unit toggle.
#[derive(Debug, Deserialize)]
pub struct ConvertTrafficRequest {
    pub value: f64,
    pub from: TrafficUnit,
    pub to: TrafficUnit,
}

#[derive(Debug, Serialize)]
pub struct ConvertedTraffic {
    pub value: f64,
    pub unit: TrafficUnit,
}

/// POST /api/v1/traffic/convert
pub async fn convert_traffic(
    Json(body): Json<ConvertTrafficRequest>,
) -> AppResult<Json<DataResponse<ConvertedTraffic>>> {
    validate_non_negative(body.value, "value")?;

    let value = traffic::convert_traffic(body.value, body.from, body.to);
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "value {} overflows when converted to {:?}",
            body.value, body.to
        ))
        .into());
    }

    Ok(Json(DataResponse {
        data: ConvertedTraffic {
            value,
            unit: body.to,
        },
    }))
}
