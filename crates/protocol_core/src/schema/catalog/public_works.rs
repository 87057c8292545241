use crate::model::kind::{Department, EntityKind};
use crate::resolve::DefaultValue;
use crate::schema::{FieldSpec, KindSchema};

pub(super) const SCHEMAS: &[KindSchema] = &[
    KindSchema {
        kind: EntityKind::StreetPavingRequest,
        department: Department::PublicWorks,
        fields: &[
            FieldSpec::text("street", &["address", "streetName"]).required(),
            FieldSpec::text("neighborhood", &["district", "bairro"]).required(),
            FieldSpec::number("lengthMeters", &["length", "extension"]).lenient(),
            FieldSpec::integer("householdsServed", &["households"]).lenient(),
        ],
        relations: &[],
        initial_status: "under_review",
    },
    KindSchema {
        kind: EntityKind::PotholeRepair,
        department: Department::PublicWorks,
        fields: &[
            FieldSpec::text("location", &["address", "street"]).required(),
            FieldSpec::text("size", &["dimension"]).default_to(DefaultValue::Text("medium")),
            FieldSpec::text("referencePoint", &["reference", "landmark"]),
        ],
        relations: &[],
        initial_status: "open",
    },
    KindSchema {
        kind: EntityKind::DrainageRequest,
        department: Department::PublicWorks,
        fields: &[
            FieldSpec::text("location", &["address"]).required(),
            FieldSpec::text("problem", &["description", "issue"]).required(),
            FieldSpec::flag("floodingRisk", &["flooding"]).default_to(DefaultValue::Bool(false)),
        ],
        relations: &[],
        initial_status: "open",
    },
    KindSchema {
        kind: EntityKind::BridgeMaintenance,
        department: Department::PublicWorks,
        fields: &[
            FieldSpec::text("bridge", &["bridgeName", "structure"]).required(),
            FieldSpec::text("location", &["address", "road"]).required(),
            FieldSpec::text("damage", &["description", "problem"]).required(),
            FieldSpec::flag("trafficBlocked", &["blocked"]).default_to(DefaultValue::Bool(false)),
        ],
        relations: &[],
        initial_status: "awaiting_inspection",
    },
    KindSchema {
        kind: EntityKind::PublicBuildingMaintenance,
        department: Department::PublicWorks,
        fields: &[
            FieldSpec::text("building", &["unit", "facility"]).required(),
            FieldSpec::text("serviceType", &["service", "type"]).required(),
            FieldSpec::text("description", &["details"]),
            FieldSpec::text("urgency", &["priority"]).default_to(DefaultValue::Text("normal")),
        ],
        relations: &[],
        initial_status: "open",
    },
    KindSchema {
        kind: EntityKind::SidewalkRepair,
        department: Department::PublicWorks,
        fields: &[
            FieldSpec::text("location", &["address", "street"]).required(),
            FieldSpec::number("lengthMeters", &["length"]).lenient(),
            FieldSpec::flag("accessibilityIssue", &["accessibility"])
                .default_to(DefaultValue::Bool(false)),
        ],
        relations: &[],
        initial_status: "open",
    },
];
