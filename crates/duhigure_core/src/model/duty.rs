//! Performance duty record, status and write drafts.
//!
//! # Invariants
//! - `status` defaults to `Pending`; transitions are caller-driven only.
//! - `member_id = None` marks a family-level duty.

use crate::model::family::FamilyId;
use crate::model::member::MemberId;
use crate::model::validation::{require, ValidationError};
use serde::{Deserialize, Serialize};

pub type DutyId = i64;

/// Duty progress label.
///
/// Stored and serialized as display text. Labels outside the known set are
/// kept verbatim in `Other` so rows written by other clients round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DutyStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Other(String),
}

impl DutyStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Other(value) => value.as_str(),
        }
    }

    /// Parses a label; known labels match case-insensitively, blank is `Pending`.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "pending" => Self::Pending,
            "in progress" | "in_progress" | "inprogress" => Self::InProgress,
            "completed" => Self::Completed,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<String> for DutyStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<DutyStatus> for String {
    fn from(value: DutyStatus) -> Self {
        match value {
            DutyStatus::Other(text) => text,
            known => known.as_str().to_string(),
        }
    }
}

/// One performance task owned by a family, optionally scoped to a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duty {
    pub id: DutyId,
    pub family_id: FamilyId,
    pub member_id: Option<MemberId>,
    /// Serialized as `duty` to match the dashboard payloads.
    #[serde(rename = "duty")]
    pub description: String,
    pub status: DutyStatus,
}

/// Input for duty creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDuty {
    pub family_id: FamilyId,
    pub member_id: Option<MemberId>,
    pub description: String,
    pub status: Option<DutyStatus>,
}

impl NewDuty {
    pub fn normalize(&self) -> Result<Self, ValidationError> {
        Ok(Self {
            family_id: self.family_id,
            member_id: self.member_id,
            description: require("duty", &self.description)?,
            status: Some(self.status.clone().unwrap_or_default()),
        })
    }
}

/// Input for duty full-replace update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DutyUpdate {
    pub description: String,
    /// `None` resets the duty to `Pending`.
    pub status: Option<DutyStatus>,
}

impl DutyUpdate {
    pub fn normalize(&self) -> Result<(String, DutyStatus), ValidationError> {
        Ok((
            require("duty", &self.description)?,
            self.status.clone().unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{DutyStatus, DutyUpdate, NewDuty};

    #[test]
    fn known_labels_parse_case_insensitively() {
        assert_eq!(DutyStatus::parse("completed"), DutyStatus::Completed);
        assert_eq!(DutyStatus::parse("In Progress"), DutyStatus::InProgress);
        assert_eq!(DutyStatus::parse("in_progress"), DutyStatus::InProgress);
        assert_eq!(DutyStatus::parse("  "), DutyStatus::Pending);
    }

    #[test]
    fn free_text_status_round_trips_verbatim() {
        let status = DutyStatus::parse("Not Started");
        assert_eq!(status, DutyStatus::Other("Not Started".to_string()));
        assert_eq!(String::from(status), "Not Started");
    }

    #[test]
    fn status_serializes_as_display_label() {
        let json = serde_json::to_string(&DutyStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let back: DutyStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(back, DutyStatus::Completed);
    }

    #[test]
    fn omitted_status_defaults_to_pending() {
        let draft = NewDuty {
            family_id: 1,
            member_id: None,
            description: "Plant trees".to_string(),
            status: None,
        };
        assert_eq!(draft.normalize().unwrap().status, Some(DutyStatus::Pending));

        let update = DutyUpdate {
            description: "Plant more trees".to_string(),
            status: None,
        };
        assert_eq!(update.normalize().unwrap().1, DutyStatus::Pending);
    }
}
