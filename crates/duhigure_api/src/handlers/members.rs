//! Member API handlers

use crate::{
    error::ApiResult,
    models::{CreateMemberRequest, MemberCreatedResponse, MessageResponse, UpdateMemberRequest},
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
    AggregationService, FamilyId, Member, MemberId, MemberProfile, MemberService,
    SqliteHouseholdRepository, SqliteMemberRepository,
};

/// List members, newest first
pub async fn list_members(State(state): State<AppState>) -> ApiResult<Json<Vec<Member>>> {
    let members = state
        .run(|conn| MemberService::new(SqliteMemberRepository::new(conn)).list_members())
        .await?;
    Ok(Json(members))
}

/// List one family's members sorted by name
pub async fn list_members_by_family(
    State(state): State<AppState>,
    path: Result<Path<FamilyId>, PathRejection>,
) -> ApiResult<Json<Vec<Member>>> {
    let Path(family_id) = path?;
    let members = state
        .run(move |conn| {
            MemberService::new(SqliteMemberRepository::new(conn)).list_members_by_family(family_id)
        })
        .await?;
    Ok(Json(members))
}

pub async fn get_member(
    State(state): State<AppState>,
    path: Result<Path<MemberId>, PathRejection>,
) -> ApiResult<Json<Member>> {
    let Path(id) = path?;
    let member = state
        .run(move |conn| MemberService::new(SqliteMemberRepository::new(conn)).get_member(id))
        .await?;
    Ok(Json(member))
}

/// Create a member, optionally with `performanceDuties`
pub async fn create_member(
    State(state): State<AppState>,
    payload: Result<Json<CreateMemberRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MemberCreatedResponse>)> {
    let Json(request) = payload?;
    let draft = request.into_new_member()?;
    let member_id = state
        .run(move |conn| MemberService::new(SqliteMemberRepository::new(conn)).create_member(&draft))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MemberCreatedResponse {
            message: "Member created successfully".to_string(),
            member_id,
        }),
    ))
}

pub async fn update_member(
    State(state): State<AppState>,
    path: Result<Path<MemberId>, PathRejection>,
    payload: Result<Json<UpdateMemberRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = path?;
    let Json(request) = payload?;
    let profile = MemberProfile::from(request);
    state
        .run(move |conn| {
            MemberService::new(SqliteMemberRepository::new(conn)).update_member(id, &profile)
        })
        .await?;
    Ok(Json(MessageResponse::new("Member updated successfully")))
}

/// Delete a member and the duties assigned to them
pub async fn delete_member(
    State(state): State<AppState>,
    path: Result<Path<MemberId>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = path?;
    state
        .run(move |conn| {
            AggregationService::new(SqliteHouseholdRepository::new(conn)).delete_member(id)
        })
        .await?;
    Ok(Json(MessageResponse::new(
        "Member and related duties deleted successfully",
    )))
}
