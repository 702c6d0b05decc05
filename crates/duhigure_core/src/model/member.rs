//! Member record and write drafts.

use crate::model::family::FamilyId;
use crate::model::validation::{require, ValidationError};
use serde::{Deserialize, Serialize};

pub type MemberId = i64;

/// One individual belonging to exactly one family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub family_id: FamilyId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub relationship: String,
}

/// Contact fields shared by create and full-replace update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub relationship: String,
}

impl MemberProfile {
    /// Returns a trimmed copy, rejecting the first blank field.
    pub fn normalize(&self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require("name", &self.name)?,
            email: require("email", &self.email)?,
            phone: require("phone", &self.phone)?,
            relationship: require("relationship", &self.relationship)?,
        })
    }
}

/// Input for member creation, with duties inserted alongside the member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMember {
    pub family_id: FamilyId,
    pub profile: MemberProfile,
    /// Duty descriptions owned by the new member; each must be non-blank.
    pub duties: Vec<String>,
}

impl NewMember {
    pub fn normalize(&self) -> Result<Self, ValidationError> {
        let duties = self
            .duties
            .iter()
            .map(|duty| require("duty", duty))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            family_id: self.family_id,
            profile: self.profile.normalize()?,
            duties,
        })
    }
}
