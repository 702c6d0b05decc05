//! Family use-case service.
//!
//! # Invariants
//! - `family_name` must be non-blank on create and update.
//! - An omitted or blank sector resolves to the configured default.

use crate::model::family::{Family, FamilyDraft, FamilyId};
use crate::model::RecordRef;
use crate::repo::family_repo::FamilyRepository;
use crate::service::{ServiceError, ServiceResult};
use log::info;

/// Family service facade over repository implementations.
pub struct FamilyService<R: FamilyRepository> {
    repo: R,
    default_sector: String,
}

impl<R: FamilyRepository> FamilyService<R> {
    pub fn new(repo: R, default_sector: impl Into<String>) -> Self {
        Self {
            repo,
            default_sector: default_sector.into(),
        }
    }

    pub fn create_family(&self, draft: &FamilyDraft) -> ServiceResult<FamilyId> {
        let (name, sector) = draft.normalize(&self.default_sector)?;
        let family_id = self.repo.create_family(&name, &sector)?;
        info!("event=family_create module=service status=ok family_id={family_id}");
        Ok(family_id)
    }

    pub fn get_family(&self, id: FamilyId) -> ServiceResult<Family> {
        self.repo
            .get_family(id)?
            .ok_or(ServiceError::NotFound(RecordRef::Family(id)))
    }

    /// All families sorted by name.
    pub fn list_families(&self) -> ServiceResult<Vec<Family>> {
        Ok(self.repo.list_families()?)
    }

    /// Replaces name and sector of an existing family.
    pub fn update_family(&self, id: FamilyId, draft: &FamilyDraft) -> ServiceResult<()> {
        let (name, sector) = draft.normalize(&self.default_sector)?;
        self.repo.update_family(id, &name, &sector)?;
        info!("event=family_update module=service status=ok family_id={id}");
        Ok(())
    }
}
