//! Member use-case service.
//!
//! # Invariants
//! - All four profile fields are required on create and update.
//! - Nested duties are written with the member or not at all.

use crate::model::family::FamilyId;
use crate::model::member::{Member, MemberId, MemberProfile, NewMember};
use crate::model::RecordRef;
use crate::repo::member_repo::MemberRepository;
use crate::service::{ServiceError, ServiceResult};
use log::info;

/// Member service facade over repository implementations.
pub struct MemberService<R: MemberRepository> {
    repo: R,
}

impl<R: MemberRepository> MemberService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one member and its initial duties.
    ///
    /// Fails with `Validation(UnknownFamily)` when `family_id` does not exist.
    pub fn create_member(&self, draft: &NewMember) -> ServiceResult<MemberId> {
        let draft = draft.normalize()?;
        let member_id =
            self.repo
                .create_member(draft.family_id, &draft.profile, &draft.duties)?;
        info!(
            "event=member_create module=service status=ok member_id={} family_id={} duty_count={}",
            member_id,
            draft.family_id,
            draft.duties.len()
        );
        Ok(member_id)
    }

    pub fn get_member(&self, id: MemberId) -> ServiceResult<Member> {
        self.repo
            .get_member(id)?
            .ok_or(ServiceError::NotFound(RecordRef::Member(id)))
    }

    pub fn list_members(&self) -> ServiceResult<Vec<Member>> {
        Ok(self.repo.list_members()?)
    }

    pub fn list_members_by_family(&self, family_id: FamilyId) -> ServiceResult<Vec<Member>> {
        Ok(self.repo.list_members_by_family(family_id)?)
    }

    pub fn update_member(&self, id: MemberId, profile: &MemberProfile) -> ServiceResult<()> {
        let profile = profile.normalize()?;
        self.repo.update_member(id, &profile)?;
        info!("event=member_update module=service status=ok member_id={id}");
        Ok(())
    }
}
