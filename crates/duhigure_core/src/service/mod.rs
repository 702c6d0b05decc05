//! Core use-case services.
//!
//! # Responsibility
//! - Validate caller input before it reaches the repositories.
//! - Orchestrate repository calls into use-case level APIs.
//! - Fold repository errors into the three caller-visible kinds.
//!
//! # Invariants
//! - Every failure surfaces as `Validation`, `NotFound` or `Store`.
//! - Service layer remains storage-agnostic.

pub mod aggregation_service;
pub mod duty_service;
pub mod family_service;
pub mod member_service;

use crate::model::validation::ValidationError;
use crate::model::RecordRef;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Caller-visible error for every household use-case.
#[derive(Debug)]
pub enum ServiceError {
    /// Required field missing or reference check failed; nothing was written.
    Validation(ValidationError),
    /// Target record does not exist; nothing was written.
    NotFound(RecordRef),
    /// Storage failure; multi-step writes were rolled back.
    Store(RepoError),
}

impl ServiceError {
    /// Stable machine-readable kind label.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
            Self::Store(_) => "store_error",
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(record) => write!(f, "{record} not found"),
            Self::Store(err) => write!(f, "store error: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(record) => Self::NotFound(record),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ServiceError;
    use crate::db::DbError;
    use crate::model::validation::ValidationError;
    use crate::model::RecordRef;
    use crate::repo::RepoError;

    #[test]
    fn repo_errors_fold_into_caller_kinds() {
        let not_found: ServiceError = RepoError::NotFound(RecordRef::Member(3)).into();
        assert!(matches!(not_found, ServiceError::NotFound(RecordRef::Member(3))));
        assert_eq!(not_found.to_string(), "member 3 not found");

        let validation: ServiceError =
            RepoError::Validation(ValidationError::UnknownFamily(8)).into();
        assert_eq!(validation.kind(), "validation_error");

        let store: ServiceError =
            RepoError::Db(DbError::Sqlite(rusqlite::Error::InvalidQuery)).into();
        assert_eq!(store.kind(), "store_error");
    }
}
