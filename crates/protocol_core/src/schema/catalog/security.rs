use crate::model::kind::{Department, EntityKind};
use crate::resolve::DefaultValue;
use crate::schema::{FieldSpec, KindSchema, RelationSpec};

pub(super) const SCHEMAS: &[KindSchema] = &[
    KindSchema {
        kind: EntityKind::SecurityIncident,
        department: Department::Security,
        fields: &[
            FieldSpec::text("incidentType", &["type", "nature"]).required(),
            FieldSpec::text("location", &["address"]).required(),
            FieldSpec::datetime("occurredAt", &["date", "incidentDate"])
                .default_to(DefaultValue::Now),
            FieldSpec::text("description", &["details"]),
            FieldSpec::flag("victimsInvolved", &["victims"]).default_to(DefaultValue::Bool(false)),
        ],
        relations: &[],
        initial_status: "registered",
    },
    KindSchema {
        kind: EntityKind::PatrolRequest,
        department: Department::Security,
        fields: &[
            FieldSpec::text("location", &["address", "area"]).required(),
            FieldSpec::text("reason", &["motive", "description"]).required(),
            FieldSpec::text("period", &["shift", "time"]).default_to(DefaultValue::Text("night")),
        ],
        relations: &[RelationSpec::optional(
            "incidentId",
            &["securityIncidentId"],
            EntityKind::SecurityIncident,
        )],
        initial_status: "requested",
    },
    KindSchema {
        kind: EntityKind::TrafficOccurrence,
        department: Department::Security,
        fields: &[
            FieldSpec::text("occurrenceType", &["type"]).required(),
            FieldSpec::text("location", &["address", "street"]).required(),
            FieldSpec::datetime("occurredAt", &["date"]).default_to(DefaultValue::Now),
            FieldSpec::integer("vehiclesInvolved", &["vehicles"]).lenient(),
            FieldSpec::flag("injuries", &["hasInjuries"]).default_to(DefaultValue::Bool(false)),
        ],
        relations: &[],
        initial_status: "registered",
    },
    KindSchema {
        kind: EntityKind::SurveillanceCameraRequest,
        department: Department::Security,
        fields: &[
            FieldSpec::text("location", &["address"]).required(),
            FieldSpec::text("justification", &["reason"]).required(),
            FieldSpec::integer("cameraCount", &["cameras"])
                .lenient()
                .default_to(DefaultValue::Integer(1)),
        ],
        relations: &[],
        initial_status: "under_review",
    },
    KindSchema {
        kind: EntityKind::LostDocumentReport,
        department: Department::Security,
        fields: &[
            FieldSpec::text("ownerName", &["name"]).required(),
            FieldSpec::text("documentType", &["document", "type"]).required(),
            FieldSpec::cpf("cpf", &["ownerCpf"]),
            FieldSpec::date("lostOn", &["date"]),
            FieldSpec::text("lastSeenLocation", &["location"]),
        ],
        relations: &[],
        initial_status: "registered",
    },
    KindSchema {
        kind: EntityKind::EventSecurityRequest,
        department: Department::Security,
        fields: &[
            FieldSpec::text("eventName", &["name", "title"]).required(),
            FieldSpec::datetime("startsAt", &["startDate", "date"]).required(),
            FieldSpec::text("location", &["venue", "address"]).required(),
            FieldSpec::integer("expectedAudience", &["audience"]).lenient(),
        ],
        relations: &[
            RelationSpec::optional("culturalEventId", &[], EntityKind::CulturalEvent),
            RelationSpec::optional("sportsEventId", &[], EntityKind::SportsEvent),
        ],
        initial_status: "requested",
    },
    KindSchema {
        kind: EntityKind::CivilDefenseAlert,
        department: Department::Security,
        fields: &[
            FieldSpec::text("hazard", &["risk", "type"]).required(),
            FieldSpec::text("location", &["address", "area"]).required(),
            FieldSpec::text("severity", &["level"]).default_to(DefaultValue::Text("moderate")),
            FieldSpec::integer("familiesAffected", &["families"]).lenient(),
            FieldSpec::datetime("reportedAt", &["date"]).default_to(DefaultValue::Now),
        ],
        relations: &[],
        initial_status: "open",
    },
];
