//! Family record and write draft.

use crate::model::validation::{require, ValidationError};
use serde::{Deserialize, Serialize};

pub type FamilyId = i64;

/// One household unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub id: FamilyId,
    /// Serialized as `family_name` to match the dashboard payloads.
    #[serde(rename = "family_name")]
    pub name: String,
    pub sector: String,
}

/// Input for create and full-replace update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyDraft {
    pub name: String,
    /// `None` or blank selects the configured default sector.
    pub sector: Option<String>,
}

impl FamilyDraft {
    pub fn new(name: impl Into<String>, sector: Option<String>) -> Self {
        Self {
            name: name.into(),
            sector,
        }
    }

    /// Validates presence and resolves the sector against `default_sector`.
    ///
    /// Returns `(name, sector)` trimmed and ready to persist.
    pub fn normalize(&self, default_sector: &str) -> Result<(String, String), ValidationError> {
        let name = require("family_name", &self.name)?;
        let sector = self
            .sector
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(default_sector)
            .to_string();
        Ok((name, sector))
    }
}
