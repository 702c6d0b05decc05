//! Liveness endpoint

use crate::models::RootResponse;
use axum::Json;

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "DUHIGURE MU MIRYANGO API is running".to_string(),
        version: duhigure_core::core_version().to_string(),
    })
}
