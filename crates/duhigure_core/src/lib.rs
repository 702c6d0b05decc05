//! Core domain logic for the Duhigure household performance tracker.
//! This crate is the single source of truth for household invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError};
pub use logging::{
    default_log_level, init_console_logging, init_logging, logging_status, LogTarget,
};
pub use model::duty::{Duty, DutyId, DutyStatus, DutyUpdate, NewDuty};
pub use model::family::{Family, FamilyDraft, FamilyId};
pub use model::member::{Member, MemberId, MemberProfile, NewMember};
pub use model::stats::{DashboardStats, FamilySummary};
pub use model::validation::ValidationError;
pub use model::RecordRef;
pub use repo::duty_repo::{DutyRepository, SqliteDutyRepository};
pub use repo::family_repo::{FamilyRepository, SqliteFamilyRepository};
pub use repo::household_repo::{CascadeReport, HouseholdRepository, SqliteHouseholdRepository};
pub use repo::member_repo::{MemberRepository, SqliteMemberRepository};
pub use repo::{RepoError, RepoResult};
pub use service::aggregation_service::AggregationService;
pub use service::duty_service::DutyService;
pub use service::family_service::FamilyService;
pub use service::member_service::MemberService;
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
