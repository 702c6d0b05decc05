//! Duty use-case service.

use crate::model::duty::{Duty, DutyId, DutyUpdate, NewDuty};
use crate::model::family::FamilyId;
use crate::model::member::MemberId;
use crate::model::RecordRef;
use crate::repo::duty_repo::DutyRepository;
use crate::service::{ServiceError, ServiceResult};
use log::info;

/// Duty service facade over repository implementations.
pub struct DutyService<R: DutyRepository> {
    repo: R,
}

impl<R: DutyRepository> DutyService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a family-level (`member_id = None`) or member-scoped duty.
    pub fn create_duty(&self, draft: &NewDuty) -> ServiceResult<DutyId> {
        let draft = draft.normalize()?;
        let duty_id = self.repo.create_duty(&draft)?;
        info!(
            "event=duty_create module=service status=ok duty_id={} family_id={} member_scoped={}",
            duty_id,
            draft.family_id,
            draft.member_id.is_some()
        );
        Ok(duty_id)
    }

    pub fn get_duty(&self, id: DutyId) -> ServiceResult<Duty> {
        self.repo
            .get_duty(id)?
            .ok_or(ServiceError::NotFound(RecordRef::Duty(id)))
    }

    pub fn list_duties(&self) -> ServiceResult<Vec<Duty>> {
        Ok(self.repo.list_duties()?)
    }

    pub fn list_duties_by_family(&self, family_id: FamilyId) -> ServiceResult<Vec<Duty>> {
        Ok(self.repo.list_duties_by_family(family_id)?)
    }

    pub fn list_duties_by_member(&self, member_id: MemberId) -> ServiceResult<Vec<Duty>> {
        Ok(self.repo.list_duties_by_member(member_id)?)
    }

    /// Replaces description and status; an omitted status resets to `Pending`.
    pub fn update_duty(&self, id: DutyId, update: &DutyUpdate) -> ServiceResult<()> {
        let (description, status) = update.normalize()?;
        self.repo.update_duty(id, &description, &status)?;
        info!(
            "event=duty_update module=service status=ok duty_id={} duty_status={}",
            id,
            status.as_str()
        );
        Ok(())
    }

    pub fn delete_duty(&self, id: DutyId) -> ServiceResult<()> {
        self.repo.delete_duty(id)?;
        info!("event=duty_delete module=service status=ok duty_id={id}");
        Ok(())
    }
}
