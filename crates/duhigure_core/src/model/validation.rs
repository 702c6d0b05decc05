//! Write-time validation errors.

use crate::model::family::FamilyId;
use crate::model::member::MemberId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reasons a write is rejected before touching storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent or blank after trim.
    MissingField(&'static str),
    /// The referenced family does not exist.
    UnknownFamily(FamilyId),
    /// The referenced member does not exist.
    UnknownMember(MemberId),
    /// The referenced member belongs to a different family.
    MemberOutsideFamily {
        member_id: MemberId,
        family_id: FamilyId,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::UnknownFamily(id) => write!(f, "family {id} does not exist"),
            Self::UnknownMember(id) => write!(f, "member {id} does not exist"),
            Self::MemberOutsideFamily {
                member_id,
                family_id,
            } => write!(f, "member {member_id} does not belong to family {family_id}"),
        }
    }
}

impl Error for ValidationError {}

/// Returns the trimmed value, or `MissingField(field)` when blank.
pub(crate) fn require(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}
