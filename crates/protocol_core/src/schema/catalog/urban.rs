use crate::model::kind::{Department, EntityKind};
use crate::resolve::DefaultValue;
use crate::schema::{FieldSpec, KindSchema, RelationSpec};

pub(super) const SCHEMAS: &[KindSchema] = &[
    KindSchema {
        kind: EntityKind::BuildingPermit,
        department: Department::UrbanPlanning,
        fields: &[
            FieldSpec::text("ownerName", &["applicantName", "name"]).required(),
            FieldSpec::cpf("ownerCpf", &["cpf", "document"]).required(),
            FieldSpec::text("address", &["lotAddress", "location"]).required(),
            FieldSpec::number("builtAreaM2", &["builtArea", "area"]).required(),
            FieldSpec::text("constructionType", &["type", "use"])
                .default_to(DefaultValue::Text("residential")),
            FieldSpec::text("responsibleEngineer", &["engineer", "architect"]),
        ],
        relations: &[],
        initial_status: "under_analysis",
    },
    KindSchema {
        kind: EntityKind::OccupancyCertificate,
        department: Department::UrbanPlanning,
        fields: &[
            FieldSpec::date("completionDate", &["finishedOn", "date"]).required(),
            FieldSpec::text("notes", &["observations"]),
        ],
        relations: &[RelationSpec::required(
            "permitId",
            &["buildingPermitId"],
            EntityKind::BuildingPermit,
        )],
        initial_status: "awaiting_inspection",
    },
    KindSchema {
        kind: EntityKind::ZoningConsultation,
        department: Department::UrbanPlanning,
        fields: &[
            FieldSpec::text("address", &["location"]).required(),
            FieldSpec::text("intendedUse", &["activity", "use"]).required(),
            FieldSpec::text("registryNumber", &["propertyRegistration", "iptu"]),
        ],
        relations: &[],
        initial_status: "open",
    },
    KindSchema {
        kind: EntityKind::SubdivisionApproval,
        department: Department::UrbanPlanning,
        fields: &[
            FieldSpec::text("developerName", &["applicantName", "companyName"]).required(),
            FieldSpec::text("address", &["location"]).required(),
            FieldSpec::number("totalAreaM2", &["area"]).required(),
            FieldSpec::integer("lotCount", &["lots"]).required(),
        ],
        relations: &[],
        initial_status: "under_analysis",
    },
    KindSchema {
        kind: EntityKind::StreetNumbering,
        department: Department::UrbanPlanning,
        fields: &[
            FieldSpec::text("street", &["address", "streetName"]).required(),
            FieldSpec::text("ownerName", &["name"]).required(),
            FieldSpec::text("registryNumber", &["iptu"]),
        ],
        relations: &[],
        initial_status: "requested",
    },
    KindSchema {
        kind: EntityKind::DemolitionPermit,
        department: Department::UrbanPlanning,
        fields: &[
            FieldSpec::text("address", &["location"]).required(),
            FieldSpec::text("ownerName", &["applicantName", "name"]).required(),
            FieldSpec::number("areaM2", &["area"]),
            FieldSpec::text("reason", &["justification"]),
        ],
        relations: &[RelationSpec::optional(
            "permitId",
            &["buildingPermitId"],
            EntityKind::BuildingPermit,
        )],
        initial_status: "under_analysis",
    },
    KindSchema {
        kind: EntityKind::UrbanIrregularityReport,
        department: Department::UrbanPlanning,
        fields: &[
            FieldSpec::text("irregularityType", &["type"]).required(),
            FieldSpec::text("location", &["address"]).required(),
            FieldSpec::text("description", &["details"]),
            FieldSpec::flag("anonymous", &["isAnonymous"]).default_to(DefaultValue::Bool(false)),
        ],
        relations: &[],
        initial_status: "open",
    },
];
