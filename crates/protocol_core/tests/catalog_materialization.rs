use protocol_core::schema::{FieldSpec, FieldType, KindSchema};
use protocol_core::validate::Format;
use protocol_core::{
    open_db_in_memory, EntityKind, KindRegistry, MaterializeError, ProtocolId,
    SqliteRecordRepository, Submission, TenantId,
};
use serde_json::{json, Map, Value};

fn sample_value(field: &FieldSpec) -> Value {
    match field.format {
        Some(Format::Cpf) => return json!("52998224725"),
        Some(Format::Email) => return json!("user@example.com"),
        Some(Format::Phone) => return json!("11987654321"),
        None => {}
    }
    match field.field_type {
        FieldType::Text => json!("sample"),
        FieldType::Integer => json!(1),
        FieldType::Number => json!(1),
        FieldType::Bool => json!(true),
        FieldType::Date => json!("2024-01-15"),
        FieldType::DateTime => json!("2024-01-15T10:00:00Z"),
    }
}

/// Creates a record of `kind` with only its required inputs, seeding
/// required relation targets in the same tenant first.
fn seed(
    registry: &KindRegistry,
    repo: &SqliteRecordRepository<'_>,
    kind: EntityKind,
    tenant: &str,
) -> String {
    let schema = registry.schema(kind).unwrap();
    let payload = minimal_payload(registry, repo, schema, tenant);
    let submission = Submission::new(TenantId::new(tenant), ProtocolId::new("seed"), payload);
    registry
        .dispatch(kind, &submission, repo)
        .unwrap_or_else(|err| panic!("seeding {kind} failed: {err}"))
        .id
        .to_string()
}

fn minimal_payload(
    registry: &KindRegistry,
    repo: &SqliteRecordRepository<'_>,
    schema: &KindSchema,
    tenant: &str,
) -> Map<String, Value> {
    let mut payload = Map::new();
    for field in schema.fields {
        if field.required && field.default.is_none() {
            payload.insert(field.name.to_string(), sample_value(field));
        }
    }
    for relation in schema.relations.iter().filter(|relation| relation.required) {
        let id = seed(registry, repo, relation.target, tenant);
        payload.insert(relation.name.to_string(), json!(id));
    }
    payload
}

#[test]
fn every_kind_materializes_from_minimal_payload() {
    let registry = KindRegistry::municipal().unwrap();
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();

    for kind in EntityKind::ALL {
        let schema = registry.schema(*kind).unwrap();
        let payload = minimal_payload(&registry, &repo, schema, "T1");
        let submission = Submission::new(TenantId::new("T1"), ProtocolId::new("PR-1"), payload);

        let record = registry
            .dispatch(*kind, &submission, &repo)
            .unwrap_or_else(|err| panic!("{kind} failed: {err}"));
        assert_eq!(record.kind, *kind);
        assert_eq!(record.status, schema.initial_status);
        assert_eq!(record.tenant_id, TenantId::new("T1"));

        let stored = repo.get_record(record.id).unwrap().unwrap();
        assert_eq!(stored.kind, *kind);
        for name in schema.required_names() {
            assert!(
                stored.attributes.contains_key(name),
                "{kind}: `{name}` not persisted"
            );
        }
    }
}

#[test]
fn omitting_any_required_input_fails_without_writing() {
    let registry = KindRegistry::municipal().unwrap();
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();

    for kind in EntityKind::ALL {
        let schema = registry.schema(*kind).unwrap();
        let complete = minimal_payload(&registry, &repo, schema, "T1");

        for name in schema.required_names() {
            let mut payload = complete.clone();
            payload.remove(name);
            let submission =
                Submission::new(TenantId::new("T1"), ProtocolId::new("PR-2"), payload);
            let before = repo.count_records(Some(*kind)).unwrap();

            match registry.dispatch(*kind, &submission, &repo) {
                Err(MaterializeError::MissingRequiredField {
                    kind: failed_kind,
                    field,
                }) => {
                    assert_eq!(failed_kind, *kind);
                    assert_eq!(field, name);
                }
                other => panic!("{kind} without `{name}`: unexpected {other:?}"),
            }
            assert_eq!(repo.count_records(Some(*kind)).unwrap(), before);
        }
    }
}

#[test]
fn blank_and_null_required_values_count_as_missing() {
    let registry = KindRegistry::municipal().unwrap();
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();

    let payload = json!({"name": "   ", "cpf": null});
    let submission =
        Submission::from_json(TenantId::new("T1"), ProtocolId::new("PR-3"), payload).unwrap();
    let err = registry
        .dispatch(EntityKind::Citizen, &submission, &repo)
        .unwrap_err();
    assert_eq!(err.field(), Some("name"));
    assert_eq!(repo.count_records(None).unwrap(), 0);
}
