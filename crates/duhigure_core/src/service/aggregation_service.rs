//! Aggregation use-case service.
//!
//! # Responsibility
//! - Cascading family and member deletion.
//! - Dashboard statistics and per-family member counts.
//!
//! # Invariants
//! - After `delete_family(id)` no member or duty references `id`.
//! - After `delete_member(id)` no duty references `id`.
//! - A failed cascade leaves every row in place.

use crate::model::family::FamilyId;
use crate::model::member::MemberId;
use crate::model::stats::{DashboardStats, FamilySummary};
use crate::repo::household_repo::{CascadeReport, HouseholdRepository};
use crate::service::{ServiceError, ServiceResult};
use log::{info, warn};

/// Service for operations that span families, members and duties.
pub struct AggregationService<R: HouseholdRepository> {
    repo: R,
}

impl<R: HouseholdRepository> AggregationService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Deletes the family's duties, then its members, then the family row.
    pub fn delete_family(&self, id: FamilyId) -> ServiceResult<CascadeReport> {
        let report = self
            .repo
            .delete_family_cascade(id)
            .map_err(|err| log_cascade_failure("family_delete", id, err.into()))?;
        info!(
            "event=family_delete module=service status=ok family_id={} members_deleted={} duties_deleted={}",
            id, report.members_deleted, report.duties_deleted
        );
        Ok(report)
    }

    /// Deletes the member's duties, then the member row.
    pub fn delete_member(&self, id: MemberId) -> ServiceResult<CascadeReport> {
        let report = self
            .repo
            .delete_member_cascade(id)
            .map_err(|err| log_cascade_failure("member_delete", id, err.into()))?;
        info!(
            "event=member_delete module=service status=ok member_id={} duties_deleted={}",
            id, report.duties_deleted
        );
        Ok(report)
    }

    pub fn compute_stats(&self) -> ServiceResult<DashboardStats> {
        Ok(self.repo.dashboard_stats()?)
    }

    pub fn list_family_summaries(&self) -> ServiceResult<Vec<FamilySummary>> {
        Ok(self.repo.list_family_summaries()?)
    }
}

fn log_cascade_failure(event: &str, id: i64, err: ServiceError) -> ServiceError {
    warn!(
        "event={} module=service status=error id={} error_kind={}",
        event,
        id,
        err.kind()
    );
    err
}
