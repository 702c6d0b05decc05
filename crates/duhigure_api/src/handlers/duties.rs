//! Duty API handlers

use crate::{
    error::ApiResult,
    models::{CreateDutyRequest, DutyCreatedResponse, MessageResponse, UpdateDutyRequest},
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
    Duty, DutyId, DutyService, DutyUpdate, FamilyId, MemberId, SqliteDutyRepository,
};

/// List duties, newest first
pub async fn list_duties(State(state): State<AppState>) -> ApiResult<Json<Vec<Duty>>> {
    let duties = state
        .run(|conn| DutyService::new(SqliteDutyRepository::new(conn)).list_duties())
        .await?;
    Ok(Json(duties))
}

pub async fn list_duties_by_family(
    State(state): State<AppState>,
    path: Result<Path<FamilyId>, PathRejection>,
) -> ApiResult<Json<Vec<Duty>>> {
    let Path(family_id) = path?;
    let duties = state
        .run(move |conn| {
            DutyService::new(SqliteDutyRepository::new(conn)).list_duties_by_family(family_id)
        })
        .await?;
    Ok(Json(duties))
}

pub async fn list_duties_by_member(
    State(state): State<AppState>,
    path: Result<Path<MemberId>, PathRejection>,
) -> ApiResult<Json<Vec<Duty>>> {
    let Path(member_id) = path?;
    let duties = state
        .run(move |conn| {
            DutyService::new(SqliteDutyRepository::new(conn)).list_duties_by_member(member_id)
        })
        .await?;
    Ok(Json(duties))
}

pub async fn get_duty(
    State(state): State<AppState>,
    path: Result<Path<DutyId>, PathRejection>,
) -> ApiResult<Json<Duty>> {
    let Path(id) = path?;
    let duty = state
        .run(move |conn| DutyService::new(SqliteDutyRepository::new(conn)).get_duty(id))
        .await?;
    Ok(Json(duty))
}

/// Assign a duty to a family, optionally scoped to one of its members
pub async fn create_duty(
    State(state): State<AppState>,
    payload: Result<Json<CreateDutyRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DutyCreatedResponse>)> {
    let Json(request) = payload?;
    let draft = request.into_new_duty()?;
    let duty_id = state
        .run(move |conn| DutyService::new(SqliteDutyRepository::new(conn)).create_duty(&draft))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DutyCreatedResponse {
            message: "Duty assigned successfully".to_string(),
            duty_id,
        }),
    ))
}

pub async fn update_duty(
    State(state): State<AppState>,
    path: Result<Path<DutyId>, PathRejection>,
    payload: Result<Json<UpdateDutyRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = path?;
    let Json(request) = payload?;
    let update = DutyUpdate::from(request);
    state
        .run(move |conn| DutyService::new(SqliteDutyRepository::new(conn)).update_duty(id, &update))
        .await?;
    Ok(Json(MessageResponse::new("Duty updated successfully")))
}

pub async fn delete_duty(
    State(state): State<AppState>,
    path: Result<Path<DutyId>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = path?;
    state
        .run(move |conn| DutyService::new(SqliteDutyRepository::new(conn)).delete_duty(id))
        .await?;
    Ok(Json(MessageResponse::new("Duty deleted successfully")))
}
