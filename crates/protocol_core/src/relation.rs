//! Tenant-aware relation resolution.
//!
//! # Responsibility
//! - Turn a relation id found in a payload into a verified reference to an
//!   existing record of the target kind.
//! - Keep "does not exist" and "exists in another tenant" as separate
//!   failures.
//!
//! # Invariants
//! - Lookups are read-only.
//! - Batches fail on the first bad reference, in declaration order.
//! - The owning tenant of a foreign record is logged, never returned.

use crate::error::{MaterializeError, MaterializeResult};
use crate::model::kind::EntityKind;
use crate::model::record::ReferencedRecord;
use crate::model::submission::TenantId;
use crate::repo::record_repo::RecordRepository;
use crate::schema::RelationSpec;
use log::warn;
use serde_json::Value;

/// A relation value pulled out of a payload, ready to be checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationReference {
    pub spec: &'static RelationSpec,
    pub id: String,
}

/// Normalizes a payload value into a record id.
///
/// Strings are trimmed and integers rendered in decimal. Anything else is
/// not a usable reference.
pub fn relation_id(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(number) => number
            .as_i64()
            .map(|n| n.to_string())
            .or_else(|| number.as_u64().map(|n| n.to_string())),
        _ => None,
    }
}

/// Resolves one reference from a record of `owner` to a record of `target`.
///
/// # Errors
/// - `RelationNotFound` when no record of `target` has this id.
/// - `TenantIsolationViolation` when it exists under another tenant.
pub fn resolve_relation<R: RecordRepository + ?Sized>(
    repo: &R,
    owner: EntityKind,
    field: &'static str,
    target: EntityKind,
    id: &str,
    tenant_id: &TenantId,
) -> MaterializeResult<ReferencedRecord> {
    let Some(found) = repo.find_by_id(target, id)? else {
        return Err(MaterializeError::RelationNotFound {
            kind: owner,
            field,
            id: id.to_string(),
        });
    };

    if found.tenant_id != *tenant_id {
        warn!(
            "event=tenant_isolation_violation module=relation kind={owner} field={field} target={target} record_id={id} tenant_id={tenant_id} owner_tenant_id={}",
            found.tenant_id
        );
        return Err(MaterializeError::TenantIsolationViolation {
            kind: owner,
            field,
            id: id.to_string(),
            tenant_id: tenant_id.clone(),
        });
    }

    Ok(found)
}

/// Resolves several references of one submission, stopping at the first
/// failure.
pub fn resolve_relations<R: RecordRepository + ?Sized>(
    repo: &R,
    owner: EntityKind,
    references: &[RelationReference],
    tenant_id: &TenantId,
) -> MaterializeResult<Vec<ReferencedRecord>> {
    references
        .iter()
        .map(|reference| {
            resolve_relation(
                repo,
                owner,
                reference.spec.name,
                reference.spec.target,
                &reference.id,
                tenant_id,
            )
        })
        .collect()
}
