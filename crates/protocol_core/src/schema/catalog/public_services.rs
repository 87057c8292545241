use crate::model::kind::{Department, EntityKind};
use crate::resolve::DefaultValue;
use crate::schema::{FieldSpec, KindSchema, RelationSpec};

pub(super) const SCHEMAS: &[KindSchema] = &[
    KindSchema {
        kind: EntityKind::StreetLightingRepair,
        department: Department::PublicServices,
        fields: &[
            FieldSpec::text("location", &["address", "street"]).required(),
            FieldSpec::text("poleNumber", &["pole", "postNumber"]),
            FieldSpec::text("problem", &["issue"]).default_to(DefaultValue::Text("lamp_out")),
        ],
        relations: &[],
        initial_status: "open",
    },
    KindSchema {
        kind: EntityKind::CemeteryService,
        department: Department::PublicServices,
        fields: &[
            FieldSpec::text("serviceType", &["service", "type"]).required(),
            FieldSpec::text("deceasedName", &["name"]).required(),
            FieldSpec::text("cemetery", &["cemeteryName"]).required(),
            FieldSpec::date("serviceDate", &["date"]),
            FieldSpec::text("graveNumber", &["grave", "plot"]),
        ],
        relations: &[RelationSpec::optional(
            "requesterId",
            &["citizenId"],
            EntityKind::Citizen,
        )],
        initial_status: "requested",
    },
    KindSchema {
        kind: EntityKind::StreetCleaningRequest,
        department: Department::PublicServices,
        fields: &[
            FieldSpec::text("location", &["address", "street"]).required(),
            FieldSpec::text("serviceType", &["service", "type"])
                .default_to(DefaultValue::Text("sweeping")),
            FieldSpec::text("description", &["details"]),
        ],
        relations: &[],
        initial_status: "open",
    },
    KindSchema {
        kind: EntityKind::WaterSupplyComplaint,
        department: Department::PublicServices,
        fields: &[
            FieldSpec::text("address", &["location"]).required(),
            FieldSpec::text("problem", &["issue", "description"]).required(),
            FieldSpec::integer("daysWithoutWater", &["days"]).lenient(),
            FieldSpec::phone("phone", &["contactPhone"]),
        ],
        relations: &[],
        initial_status: "open",
    },
    KindSchema {
        kind: EntityKind::PublicTransportComplaint,
        department: Department::PublicServices,
        fields: &[
            FieldSpec::text("line", &["busLine", "route"]).required(),
            FieldSpec::text("description", &["complaint", "details"]).required(),
            FieldSpec::datetime("occurredAt", &["date"]).default_to(DefaultValue::Now),
            FieldSpec::email("email", &["contactEmail"]),
        ],
        relations: &[],
        initial_status: "open",
    },
    KindSchema {
        kind: EntityKind::PestControlRequest,
        department: Department::PublicServices,
        fields: &[
            FieldSpec::text("address", &["location"]).required(),
            FieldSpec::text("pest", &["pestType", "vector"]).required(),
            FieldSpec::flag("standingWater", &["breedingSite"]).default_to(DefaultValue::Bool(false)),
        ],
        relations: &[],
        initial_status: "scheduled",
    },
];
