//! API route definitions

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{
    handlers::{duties, families, health, members, stats},
    middleware::logging::log_requests,
    state::AppState,
};

/// Builds the full router bound to `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        // Families
        .route(
            "/families",
            get(families::list_families).post(families::create_family),
        )
        .route("/families/summaries", get(families::list_family_summaries))
        .route(
            "/families/:id",
            get(families::get_family)
                .put(families::update_family)
                .delete(families::delete_family),
        )
        // Members
        .route(
            "/members",
            get(members::list_members).post(members::create_member),
        )
        .route(
            "/members/family/:family_id",
            get(members::list_members_by_family),
        )
        .route(
            "/members/:id",
            get(members::get_member)
                .put(members::update_member)
                .delete(members::delete_member),
        )
        // Duties
        .route("/duties", get(duties::list_duties).post(duties::create_duty))
        .route(
            "/duties/family/:family_id",
            get(duties::list_duties_by_family),
        )
        .route(
            "/duties/member/:member_id",
            get(duties::list_duties_by_member),
        )
        .route(
            "/duties/:id",
            get(duties::get_duty)
                .put(duties::update_duty)
                .delete(duties::delete_duty),
        )
        // Statistics
        .route("/stats", get(stats::get_stats))
        .layer(middleware::from_fn(log_requests))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
