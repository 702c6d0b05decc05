//! Household domain model.
//!
//! # Responsibility
//! - Define the family, member and duty records persisted by core.
//! - Define write drafts and their presence checks.
//!
//! # Invariants
//! - Identifiers are generated by storage and never reused.
//! - A member belongs to exactly one family.
//! - A duty belongs to one family and optionally one member of that family.

pub mod duty;
pub mod family;
pub mod member;
pub mod stats;
pub mod validation;

use std::fmt::{Display, Formatter};

/// Typed reference to one stored record, used by not-found reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRef {
    Family(family::FamilyId),
    Member(member::MemberId),
    Duty(duty::DutyId),
}

impl Display for RecordRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Family(id) => write!(f, "family {id}"),
            Self::Member(id) => write!(f, "member {id}"),
            Self::Duty(id) => write!(f, "duty {id}"),
        }
    }
}
