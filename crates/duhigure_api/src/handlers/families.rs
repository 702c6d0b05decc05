//! Family API handlers

use crate::{
    error::ApiResult,
    models::{FamilyCreatedResponse, FamilyRequest, MessageResponse},
    state::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use duhigure_core::{
    AggregationService, Family, FamilyId, FamilyService, FamilySummary,
    SqliteFamilyRepository, SqliteHouseholdRepository,
};

/// List families sorted by name
pub async fn list_families(State(state): State<AppState>) -> ApiResult<Json<Vec<Family>>> {
    let sector = state.default_sector().to_string();
    let families = state
        .run(move |conn| {
            FamilyService::new(SqliteFamilyRepository::new(conn), sector).list_families()
        })
        .await?;
    Ok(Json(families))
}

/// List families with their member counts
pub async fn list_family_summaries(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<FamilySummary>>> {
    let summaries = state
        .run(|conn| {
            AggregationService::new(SqliteHouseholdRepository::new(conn)).list_family_summaries()
        })
        .await?;
    Ok(Json(summaries))
}

pub async fn get_family(
    State(state): State<AppState>,
    path: Result<Path<FamilyId>, PathRejection>,
) -> ApiResult<Json<Family>> {
    let Path(id) = path?;
    let sector = state.default_sector().to_string();
    let family = state
        .run(move |conn| {
            FamilyService::new(SqliteFamilyRepository::new(conn), sector).get_family(id)
        })
        .await?;
    Ok(Json(family))
}

pub async fn create_family(
    State(state): State<AppState>,
    payload: Result<Json<FamilyRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<FamilyCreatedResponse>)> {
    let Json(request) = payload?;
    let draft = request.into_draft();
    let sector = state.default_sector().to_string();
    let family_id = state
        .run(move |conn| {
            FamilyService::new(SqliteFamilyRepository::new(conn), sector).create_family(&draft)
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FamilyCreatedResponse {
            message: "Family created successfully".to_string(),
            family_id,
        }),
    ))
}

pub async fn update_family(
    State(state): State<AppState>,
    path: Result<Path<FamilyId>, PathRejection>,
    payload: Result<Json<FamilyRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = path?;
    let Json(request) = payload?;
    let draft = request.into_draft();
    let sector = state.default_sector().to_string();
    state
        .run(move |conn| {
            FamilyService::new(SqliteFamilyRepository::new(conn), sector).update_family(id, &draft)
        })
        .await?;
    Ok(Json(MessageResponse::new("Family updated successfully")))
}

/// Delete a family with all of its members and duties
pub async fn delete_family(
    State(state): State<AppState>,
    path: Result<Path<FamilyId>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = path?;
    state
        .run(move |conn| {
            AggregationService::new(SqliteHouseholdRepository::new(conn)).delete_family(id)
        })
        .await?;
    Ok(Json(MessageResponse::new(
        "Family and all related data deleted successfully",
    )))
}
