//! Request and response bodies.
//!
//! Field names follow the dashboard's existing payloads (`family_name`,
//! `performanceDuties`, `totalFamilies`, ...). Request structs default every
//! field so a missing value reaches validation instead of failing decoding.

use duhigure_core::{
    DashboardStats, DutyStatus, DutyUpdate, FamilyDraft, FamilyId, MemberId, MemberProfile,
    NewDuty, NewMember, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Create or full-replace body for a family.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FamilyRequest {
    pub family_name: String,
    pub sector: Option<String>,
}

impl FamilyRequest {
    pub fn into_draft(self) -> FamilyDraft {
        FamilyDraft::new(self.family_name, self.sector)
    }
}

/// Member creation body with optional nested duty descriptions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateMemberRequest {
    pub family_id: Option<FamilyId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub relationship: String,
    /// `null` or absent means no nested duties.
    #[serde(rename = "performanceDuties")]
    pub performance_duties: Option<Vec<String>>,
}

impl CreateMemberRequest {
    pub fn into_new_member(self) -> Result<NewMember, ValidationError> {
        let family_id = self
            .family_id
            .ok_or(ValidationError::MissingField("family_id"))?;
        Ok(NewMember {
            family_id,
            profile: MemberProfile {
                name: self.name,
                email: self.email,
                phone: self.phone,
                relationship: self.relationship,
            },
            duties: self.performance_duties.unwrap_or_default(),
        })
    }
}

/// Full-replace body for a member.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateMemberRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub relationship: String,
}

impl From<UpdateMemberRequest> for MemberProfile {
    fn from(value: UpdateMemberRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            relationship: value.relationship,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateDutyRequest {
    pub family_id: Option<FamilyId>,
    pub member_id: Option<MemberId>,
    pub duty: String,
    pub status: Option<String>,
}

impl CreateDutyRequest {
    pub fn into_new_duty(self) -> Result<NewDuty, ValidationError> {
        let family_id = self
            .family_id
            .ok_or(ValidationError::MissingField("family_id"))?;
        Ok(NewDuty {
            family_id,
            member_id: self.member_id,
            description: self.duty,
            status: parse_status(self.status),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateDutyRequest {
    pub duty: String,
    pub status: Option<String>,
}

impl From<UpdateDutyRequest> for DutyUpdate {
    fn from(value: UpdateDutyRequest) -> Self {
        Self {
            description: value.duty,
            status: parse_status(value.status),
        }
    }
}

fn parse_status(value: Option<String>) -> Option<DutyStatus> {
    value.map(|status| DutyStatus::parse(&status))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyCreatedResponse {
    pub message: String,
    pub family_id: FamilyId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCreatedResponse {
    pub message: String,
    pub member_id: MemberId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyCreatedResponse {
    pub message: String,
    pub duty_id: i64,
}

/// Dashboard counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_families: u64,
    pub total_members: u64,
    pub total_duties: u64,
    pub pending_duties: u64,
    /// Omitted when there are no duties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_rate: Option<u32>,
}

impl From<DashboardStats> for StatsResponse {
    fn from(value: DashboardStats) -> Self {
        Self {
            total_families: value.family_count,
            total_members: value.member_count,
            total_duties: value.duty_count,
            pending_duties: value.pending_duty_count,
            completion_rate: value.completion_rate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}
