//! Dashboard statistics handler

use crate::{error::ApiResult, models::StatsResponse, state::AppState};
use axum::{extract::State, Json};
use duhigure_core::{AggregationService, SqliteHouseholdRepository};

pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let stats = state
        .run(|conn| AggregationService::new(SqliteHouseholdRepository::new(conn)).compute_stats())
        .await?;
    Ok(Json(StatsResponse::from(stats)))
}
