use crate::model::kind::{Department, EntityKind};
use crate::resolve::DefaultValue;
use crate::schema::{FieldSpec, KindSchema, RelationSpec};

pub(super) const SCHEMAS: &[KindSchema] = &[
    KindSchema {
        kind: EntityKind::EnvironmentalLicense,
        department: Department::Environment,
        fields: &[
            FieldSpec::text("applicantName", &["companyName", "name"]).required(),
            FieldSpec::text("activity", &["enterprise", "activityType"]).required(),
            FieldSpec::text("licenseType", &["type"]).default_to(DefaultValue::Text("prior")),
            FieldSpec::text("address", &["location"]).required(),
            FieldSpec::number("areaM2", &["area"]),
            FieldSpec::email("email", &["contactEmail"]),
        ],
        relations: &[],
        initial_status: "under_analysis",
    },
    KindSchema {
        kind: EntityKind::EnvironmentalComplaint,
        department: Department::Environment,
        fields: &[
            FieldSpec::text("description", &["complaint", "details"]).required(),
            FieldSpec::text("location", &["address"]).required(),
            FieldSpec::text("category", &["type"]).default_to(DefaultValue::Text("other")),
            FieldSpec::flag("anonymous", &["isAnonymous"]).default_to(DefaultValue::Bool(false)),
            FieldSpec::phone("reporterPhone", &["phone"]),
        ],
        relations: &[],
        initial_status: "open",
    },
    KindSchema {
        kind: EntityKind::TreeRemovalRequest,
        department: Department::Environment,
        fields: &[
            FieldSpec::text("address", &["location"]).required(),
            FieldSpec::text("reason", &["justification"]).required(),
            FieldSpec::integer("treeCount", &["trees", "quantity"])
                .lenient()
                .default_to(DefaultValue::Integer(1)),
            FieldSpec::text("species", &["treeSpecies"]),
            FieldSpec::flag("riskOfFalling", &["risk"]).default_to(DefaultValue::Bool(false)),
        ],
        relations: &[],
        initial_status: "awaiting_inspection",
    },
    KindSchema {
        kind: EntityKind::SeedlingRequest,
        department: Department::Environment,
        fields: &[
            FieldSpec::text("requesterName", &["name"]).required(),
            FieldSpec::text("species", &["seedling", "plant"]).required(),
            FieldSpec::integer("quantity", &["amount"]).required(),
            FieldSpec::text("plantingSite", &["address", "location"]),
        ],
        relations: &[],
        initial_status: "requested",
    },
    KindSchema {
        kind: EntityKind::WasteCollectionRequest,
        department: Department::Environment,
        fields: &[
            FieldSpec::text("address", &["location"]).required(),
            FieldSpec::text("wasteType", &["type", "material"]).required(),
            FieldSpec::number("volumeM3", &["volume"]).lenient(),
            FieldSpec::date("preferredDate", &["date"]),
        ],
        relations: &[],
        initial_status: "scheduled",
    },
    KindSchema {
        kind: EntityKind::AnimalRescue,
        department: Department::Environment,
        fields: &[
            FieldSpec::text("species", &["animal", "animalType"]).required(),
            FieldSpec::text("location", &["address"]).required(),
            FieldSpec::text("condition", &["situation", "description"]),
            FieldSpec::flag("injured", &["isInjured"]).default_to(DefaultValue::Bool(false)),
            FieldSpec::phone("reporterPhone", &["phone"]),
        ],
        relations: &[RelationSpec::optional(
            "complaintId",
            &["environmentalComplaintId"],
            EntityKind::EnvironmentalComplaint,
        )],
        initial_status: "open",
    },
    KindSchema {
        kind: EntityKind::EnvironmentalEducationActivity,
        department: Department::Environment,
        fields: &[
            FieldSpec::text("title", &["name", "theme"]).required(),
            FieldSpec::text("institution", &["school", "organization"]).required(),
            FieldSpec::date("activityDate", &["date"]),
            FieldSpec::integer("participants", &["audience"]).lenient(),
        ],
        relations: &[],
        initial_status: "requested",
    },
    KindSchema {
        kind: EntityKind::BurningAuthorization,
        department: Department::Environment,
        fields: &[
            FieldSpec::text("purpose", &["reason"]).required(),
            FieldSpec::number("areaHectares", &["area"]).required(),
            FieldSpec::date("plannedDate", &["date"]).required(),
        ],
        relations: &[
            RelationSpec::required("producerId", &["ruralProducerId"], EntityKind::RuralProducer),
            RelationSpec::required("propertyId", &["ruralPropertyId"], EntityKind::RuralProperty),
        ],
        initial_status: "under_analysis",
    },
];
