//! Materialization error taxonomy.
//!
//! # Responsibility
//! - Give callers a stable, inspectable error kind plus the offending
//!   kind/field/id for every failed materialization.
//!
//! # Invariants
//! - Every variant except `Repo` is raised before any write.
//! - `TenantIsolationViolation` is never collapsed into `RelationNotFound`.

use crate::model::kind::EntityKind;
use crate::model::submission::{SubmissionError, TenantId};
use crate::repo::record_repo::RepoError;
use crate::validate::FormatReason;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type MaterializeResult<T> = Result<T, MaterializeError>;

#[derive(Debug)]
pub enum MaterializeError {
    /// Submission provenance is unusable (blank tenant/protocol).
    InvalidSubmission(SubmissionError),
    /// No schema is registered for the requested tag.
    UnknownEntityKind { kind: String },
    MissingRequiredField {
        kind: EntityKind,
        field: &'static str,
    },
    Format {
        kind: EntityKind,
        field: &'static str,
        reason: FormatReason,
    },
    RelationNotFound {
        kind: EntityKind,
        field: &'static str,
        id: String,
    },
    /// The referenced record exists but belongs to another tenant.
    /// `tenant_id` is the submitting tenant; the owner is never exposed.
    TenantIsolationViolation {
        kind: EntityKind,
        field: &'static str,
        id: String,
        tenant_id: TenantId,
    },
    /// Persistence boundary failure during a relation read or the write.
    Repo(RepoError),
}

impl MaterializeError {
    /// Stable machine-readable code for logs and caller-side mapping.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSubmission(_) => "invalid_submission",
            Self::UnknownEntityKind { .. } => "unknown_entity_kind",
            Self::MissingRequiredField { .. } => "missing_required_field",
            Self::Format { .. } => "format_error",
            Self::RelationNotFound { .. } => "relation_not_found",
            Self::TenantIsolationViolation { .. } => "tenant_isolation_violation",
            Self::Repo(_) => "storage_error",
        }
    }

    /// Field that caused the failure, when one is involved.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingRequiredField { field, .. }
            | Self::Format { field, .. }
            | Self::RelationNotFound { field, .. }
            | Self::TenantIsolationViolation { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Validation failures are deterministic for a given submission; only
    /// storage failures may succeed on a later attempt.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Repo(_))
    }
}

impl Display for MaterializeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSubmission(err) => write!(f, "invalid submission: {err}"),
            Self::UnknownEntityKind { kind } => write!(f, "unknown entity kind `{kind}`"),
            Self::MissingRequiredField { kind, field } => {
                write!(f, "{kind}: required field `{field}` is missing")
            }
            Self::Format {
                kind,
                field,
                reason,
            } => write!(f, "{kind}: field `{field}` is invalid: {reason}"),
            Self::RelationNotFound { kind, field, id } => {
                write!(f, "{kind}: `{field}` references unknown record `{id}`")
            }
            Self::TenantIsolationViolation {
                kind,
                field,
                id,
                tenant_id,
            } => write!(
                f,
                "{kind}: `{field}` references record `{id}` outside tenant `{tenant_id}`"
            ),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MaterializeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidSubmission(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for MaterializeError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<SubmissionError> for MaterializeError {
    fn from(value: SubmissionError) -> Self {
        Self::InvalidSubmission(value)
    }
}

impl From<rusqlite::Error> for MaterializeError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Repo(RepoError::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::MaterializeError;
    use crate::model::kind::EntityKind;
    use crate::repo::record_repo::RepoError;
    use crate::model::submission::TenantId;

    #[test]
    fn isolation_violation_is_distinct_from_not_found() {
        let not_found = MaterializeError::RelationNotFound {
            kind: EntityKind::RuralProperty,
            field: "producerId",
            id: "P1".to_string(),
        };
        let violation = MaterializeError::TenantIsolationViolation {
            kind: EntityKind::RuralProperty,
            field: "producerId",
            id: "P1".to_string(),
            tenant_id: TenantId::new("T1"),
        };
        assert_ne!(not_found.code(), violation.code());
        assert_eq!(violation.field(), Some("producerId"));
        assert!(violation.to_string().contains("outside tenant `T1`"));
    }

    #[test]
    fn only_storage_failures_are_outside_validation() {
        let missing = MaterializeError::MissingRequiredField {
            kind: EntityKind::Vaccination,
            field: "vaccine",
        };
        assert!(missing.is_validation());

        let storage = MaterializeError::Repo(RepoError::InvalidData("bad row".to_string()));
        assert!(!storage.is_validation());
        assert_eq!(storage.code(), "storage_error");
        assert_eq!(storage.field(), None);
    }
}
