//! Generic materialization handler.
//!
//! # Responsibility
//! - Interpret one `KindSchema` against one `Submission` and produce exactly
//!   one persisted record.
//!
//! # Invariants
//! - Phases run in a fixed order: field resolution and required checks,
//!   coercion and formats, relation presence and resolution, composition,
//!   write.
//! - Inside a phase, fields and relations are visited in declaration order,
//!   so the first reported failure is deterministic.
//! - Nothing is written unless every validation passed.
//!
//! # See also
//! - crate::registry::KindRegistry::dispatch

use crate::error::{MaterializeError, MaterializeResult};
use crate::model::record::{Attributes, FieldValue, MaterializedRecord, RecordDraft};
use crate::model::submission::Submission;
use crate::relation::{relation_id, resolve_relations, RelationReference};
use crate::repo::record_repo::RecordRepository;
use crate::resolve::{coerce, resolve_field, resolve_or_default, Resolution};
use crate::schema::{FieldSpec, KindSchema, Unparsable};
use crate::validate::FormatReason;
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::time::Instant;

enum FieldOutcome {
    Value(FieldValue),
    Unset,
    Invalid(FormatReason),
}

/// Materializes `submission` as a record of `schema.kind`.
///
/// `now` feeds computed defaults (`Today`, `Now`).
pub fn materialize<R: RecordRepository + ?Sized>(
    schema: &KindSchema,
    submission: &Submission,
    repo: &R,
    now: DateTime<Utc>,
) -> MaterializeResult<MaterializedRecord> {
    let started_at = Instant::now();
    let result = run(schema, submission, repo, now);

    match &result {
        Ok(record) => info!(
            "event=materialize module=engine status=ok kind={} tenant_id={} protocol_id={} record_id={} duration_ms={}",
            schema.kind,
            submission.tenant_id,
            submission.protocol_id,
            record.id,
            started_at.elapsed().as_millis()
        ),
        Err(err) => info!(
            "event=materialize module=engine status=rejected kind={} tenant_id={} protocol_id={} error_code={} field={} duration_ms={}",
            schema.kind,
            submission.tenant_id,
            submission.protocol_id,
            err.code(),
            err.field().unwrap_or("-"),
            started_at.elapsed().as_millis()
        ),
    }
    result
}

fn run<R: RecordRepository + ?Sized>(
    schema: &KindSchema,
    submission: &Submission,
    repo: &R,
    now: DateTime<Utc>,
) -> MaterializeResult<MaterializedRecord> {
    submission.validate()?;

    let outcomes: Vec<(&'static FieldSpec, FieldOutcome)> = schema
        .fields
        .iter()
        .map(|spec| (spec, resolve_spec(spec, submission, now)))
        .collect();

    if let Some((spec, _)) = outcomes
        .iter()
        .find(|(spec, outcome)| spec.required && matches!(outcome, FieldOutcome::Unset))
    {
        return Err(MaterializeError::MissingRequiredField {
            kind: schema.kind,
            field: spec.name,
        });
    }

    let mut attributes = Attributes::new();
    for (spec, outcome) in outcomes {
        let value = match outcome {
            FieldOutcome::Unset => continue,
            FieldOutcome::Invalid(reason) => {
                return Err(MaterializeError::Format {
                    kind: schema.kind,
                    field: spec.name,
                    reason,
                });
            }
            FieldOutcome::Value(value) => value,
        };
        let value = apply_format(schema, spec, value)?;
        attributes.insert(spec.name.to_string(), value);
    }

    let references = collect_references(schema, submission)?;
    let resolved = resolve_relations(repo, schema.kind, &references, &submission.tenant_id)?;
    debug!(
        "event=relations_resolved module=engine kind={} count={}",
        schema.kind,
        resolved.len()
    );
    for (reference, record) in references.iter().zip(resolved) {
        attributes.insert(reference.spec.name.to_string(), FieldValue::Text(record.id));
    }

    let draft = RecordDraft {
        kind: schema.kind,
        tenant_id: submission.tenant_id.clone(),
        protocol_id: submission.protocol_id.clone(),
        protocol_number: submission.protocol_number.clone(),
        status: schema.initial_status.to_string(),
        attributes,
    };
    Ok(repo.create_record(&draft)?)
}

fn resolve_spec(spec: &FieldSpec, submission: &Submission, now: DateTime<Utc>) -> FieldOutcome {
    match resolve_or_default(&submission.payload, spec.name, spec.aliases, spec.default, now) {
        Resolution::Absent => FieldOutcome::Unset,
        Resolution::Defaulted(value) => FieldOutcome::Value(value),
        Resolution::Present(raw) => match coerce(spec.field_type, &raw) {
            Ok(value) => FieldOutcome::Value(value),
            Err(reason) => match spec.on_unparsable {
                Unparsable::Reject => FieldOutcome::Invalid(reason),
                Unparsable::UseDefault => match spec.default.value_at(now) {
                    Some(value) => FieldOutcome::Value(value),
                    None => FieldOutcome::Unset,
                },
            },
        },
    }
}

fn apply_format(
    schema: &KindSchema,
    spec: &FieldSpec,
    value: FieldValue,
) -> MaterializeResult<FieldValue> {
    let Some(format) = spec.format else {
        return Ok(value);
    };
    let format_error = |reason| MaterializeError::Format {
        kind: schema.kind,
        field: spec.name,
        reason,
    };

    let FieldValue::Text(text) = value else {
        return Err(format_error(FormatReason::NotText));
    };
    match format.validate(Some(text.as_str()), spec.required) {
        Ok(Some(normalized)) => Ok(FieldValue::Text(normalized)),
        Ok(None) => Err(format_error(FormatReason::Missing)),
        Err(reason) => Err(format_error(reason)),
    }
}

fn collect_references(
    schema: &KindSchema,
    submission: &Submission,
) -> MaterializeResult<Vec<RelationReference>> {
    let mut references = Vec::new();
    for spec in schema.relations {
        let Some(raw) = resolve_field(&submission.payload, spec.name, spec.aliases) else {
            if spec.required {
                return Err(MaterializeError::MissingRequiredField {
                    kind: schema.kind,
                    field: spec.name,
                });
            }
            continue;
        };
        let id = relation_id(raw).ok_or(MaterializeError::Format {
            kind: schema.kind,
            field: spec.name,
            reason: FormatReason::InvalidReference,
        })?;
        references.push(RelationReference { spec, id });
    }
    Ok(references)
}

#[cfg(test)]
mod tests {
    use super::materialize;
    use crate::error::MaterializeError;
    use crate::model::kind::{Department, EntityKind};
    use crate::model::record::{FieldValue, MaterializedRecord, RecordDraft, ReferencedRecord};
    use crate::model::submission::{ProtocolId, Submission, TenantId};
    use crate::repo::record_repo::{RecordRepository, RepoResult};
    use crate::resolve::DefaultValue;
    use crate::schema::{FieldSpec, KindSchema, RelationSpec};
    use crate::validate::FormatReason;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::cell::RefCell;
    use uuid::Uuid;

    const PATIENT: KindSchema = KindSchema {
        kind: EntityKind::HealthAttendance,
        department: Department::Health,
        fields: &[
            FieldSpec::text("patientName", &["citizenName"]).required(),
            FieldSpec::cpf("cpf", &["document"]).required(),
            FieldSpec::integer("age", &[]),
            FieldSpec::integer("visits", &[])
                .default_to(DefaultValue::Integer(0))
                .lenient(),
            FieldSpec::text("priority", &[]).default_to(DefaultValue::Text("normal")),
        ],
        relations: &[RelationSpec::optional(
            "citizenId",
            &[],
            EntityKind::Citizen,
        )],
        initial_status: "waiting",
    };

    #[derive(Default)]
    struct Recording {
        known: Vec<ReferencedRecord>,
        writes: RefCell<Vec<RecordDraft>>,
    }

    impl RecordRepository for Recording {
        fn find_by_id(&self, kind: EntityKind, id: &str) -> RepoResult<Option<ReferencedRecord>> {
            Ok(self
                .known
                .iter()
                .find(|record| record.kind == kind && record.id == id)
                .cloned())
        }

        fn create_record(&self, draft: &RecordDraft) -> RepoResult<MaterializedRecord> {
            self.writes.borrow_mut().push(draft.clone());
            Ok(MaterializedRecord {
                id: Uuid::new_v4(),
                kind: draft.kind,
                tenant_id: draft.tenant_id.clone(),
                protocol_id: draft.protocol_id.clone(),
                protocol_number: draft.protocol_number.clone(),
                status: draft.status.clone(),
                attributes: draft.attributes.clone(),
                created_at: 0,
            })
        }
    }

    fn submit(payload: serde_json::Value) -> Submission {
        Submission::from_json(TenantId::new("T1"), ProtocolId::new("PR1"), payload).unwrap()
    }

    #[test]
    fn composes_normalized_attributes_status_and_provenance() {
        let repo = Recording::default();
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        let record = materialize(
            &PATIENT,
            &submit(json!({"citizenName": " Maria ", "document": "529.982.247-25", "age": "41"})),
            &repo,
            now,
        )
        .unwrap();

        assert_eq!(record.status, "waiting");
        assert_eq!(record.tenant_id, TenantId::new("T1"));
        assert_eq!(record.protocol_id.as_str(), "PR1");
        assert_eq!(
            record.attribute("patientName"),
            Some(&FieldValue::Text("Maria".to_string()))
        );
        assert_eq!(
            record.attribute("cpf"),
            Some(&FieldValue::Text("52998224725".to_string()))
        );
        assert_eq!(record.attribute("age"), Some(&FieldValue::Integer(41)));
        assert_eq!(record.attribute("visits"), Some(&FieldValue::Integer(0)));
        assert_eq!(
            record.attribute("priority"),
            Some(&FieldValue::Text("normal".to_string()))
        );
        assert_eq!(record.attribute("citizenId"), None);
        assert_eq!(repo.writes.borrow().len(), 1);
    }

    #[test]
    fn first_missing_field_in_declaration_order_is_reported() {
        let repo = Recording::default();
        let err = materialize(&PATIENT, &submit(json!({})), &repo, Utc::now()).unwrap_err();
        match err {
            MaterializeError::MissingRequiredField { kind, field } => {
                assert_eq!(kind, EntityKind::HealthAttendance);
                assert_eq!(field, "patientName");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(repo.writes.borrow().is_empty());
    }

    #[test]
    fn missing_fields_are_reported_before_format_errors() {
        let repo = Recording::default();
        let err = materialize(
            &PATIENT,
            &submit(json!({"patientName": "Ana", "age": "old"})),
            &repo,
            Utc::now(),
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("cpf"));
        assert_eq!(err.code(), "missing_required_field");
    }

    #[test]
    fn invalid_checksum_and_unparsable_values_are_format_errors() {
        let repo = Recording::default();
        let err = materialize(
            &PATIENT,
            &submit(json!({"patientName": "Ana", "cpf": "12345678900"})),
            &repo,
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MaterializeError::Format {
                field: "cpf",
                reason: FormatReason::InvalidCpf,
                ..
            }
        ));

        let err = materialize(
            &PATIENT,
            &submit(json!({"patientName": "Ana", "cpf": "52998224725", "age": "old"})),
            &repo,
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MaterializeError::Format {
                field: "age",
                reason: FormatReason::NotAnInteger,
                ..
            }
        ));
        assert!(repo.writes.borrow().is_empty());
    }

    #[test]
    fn lenient_field_falls_back_to_default() {
        let repo = Recording::default();
        let record = materialize(
            &PATIENT,
            &submit(json!({"patientName": "Ana", "cpf": "52998224725", "visits": "many"})),
            &repo,
            Utc::now(),
        )
        .unwrap();
        assert_eq!(record.attribute("visits"), Some(&FieldValue::Integer(0)));
    }

    #[test]
    fn resolved_relation_id_is_stored_under_canonical_name() {
        let repo = Recording {
            known: vec![ReferencedRecord {
                id: "7".to_string(),
                kind: EntityKind::Citizen,
                tenant_id: TenantId::new("T1"),
            }],
            ..Recording::default()
        };
        let record = materialize(
            &PATIENT,
            &submit(json!({"patientName": "Ana", "cpf": "52998224725", "citizenId": 7})),
            &repo,
            Utc::now(),
        )
        .unwrap();
        assert_eq!(
            record.attribute("citizenId"),
            Some(&FieldValue::Text("7".to_string()))
        );
    }

    #[test]
    fn non_scalar_relation_value_is_rejected_before_lookup() {
        let repo = Recording::default();
        let err = materialize(
            &PATIENT,
            &submit(json!({"patientName": "Ana", "cpf": "52998224725", "citizenId": [1]})),
            &repo,
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MaterializeError::Format {
                reason: FormatReason::InvalidReference,
                ..
            }
        ));
    }
}
