use crate::model::kind::{Department, EntityKind};
use crate::resolve::DefaultValue;
use crate::schema::{FieldSpec, KindSchema, RelationSpec};

pub(super) const SCHEMAS: &[KindSchema] = &[
    KindSchema {
        kind: EntityKind::RuralProducer,
        department: Department::Agriculture,
        fields: &[
            FieldSpec::text("name", &["producerName", "fullName"]).required(),
            FieldSpec::cpf("cpf", &["document"]).required(),
            FieldSpec::phone("phone", &["contactPhone"]),
            FieldSpec::text("dapNumber", &["dap", "cafNumber"]),
            FieldSpec::text("community", &["locality", "settlement"]),
        ],
        relations: &[],
        initial_status: "active",
    },
    KindSchema {
        kind: EntityKind::RuralProperty,
        department: Department::Agriculture,
        fields: &[
            FieldSpec::text("name", &["propertyName"]).required(),
            FieldSpec::number("size", &["area", "hectares"]).required(),
            FieldSpec::text("location", &["address", "locality"]).required(),
            FieldSpec::text("carNumber", &["car", "ruralRegistry"]),
            FieldSpec::text("mainActivity", &["activity", "production"]),
        ],
        relations: &[RelationSpec::required(
            "producerId",
            &["ownerId", "ruralProducerId"],
            EntityKind::RuralProducer,
        )],
        initial_status: "active",
    },
    KindSchema {
        kind: EntityKind::TechnicalAssistance,
        department: Department::Agriculture,
        fields: &[
            FieldSpec::text("topic", &["subject", "demand"]).required(),
            FieldSpec::text("description", &["details"]),
            FieldSpec::date("preferredDate", &["date"]),
        ],
        relations: &[
            RelationSpec::required(
                "producerId",
                &["ownerId", "ruralProducerId"],
                EntityKind::RuralProducer,
            ),
            RelationSpec::optional("propertyId", &["ruralPropertyId"], EntityKind::RuralProperty),
        ],
        initial_status: "requested",
    },
    KindSchema {
        kind: EntityKind::MachineryRequest,
        department: Department::Agriculture,
        fields: &[
            FieldSpec::text("machinery", &["equipment", "machine"]).required(),
            FieldSpec::text("service", &["serviceType"]).required(),
            FieldSpec::number("hours", &["estimatedHours"])
                .lenient()
                .default_to(DefaultValue::Number(1.0)),
            FieldSpec::date("preferredDate", &["date"]),
        ],
        relations: &[
            RelationSpec::required(
                "producerId",
                &["ownerId", "ruralProducerId"],
                EntityKind::RuralProducer,
            ),
            RelationSpec::required("propertyId", &["ruralPropertyId"], EntityKind::RuralProperty),
        ],
        initial_status: "queued",
    },
    KindSchema {
        kind: EntityKind::SeedDistribution,
        department: Department::Agriculture,
        fields: &[
            FieldSpec::text("seedType", &["seed", "crop"]).required(),
            FieldSpec::number("quantityKg", &["quantity", "kg"]).required(),
            FieldSpec::text("season", &["harvest"]),
        ],
        relations: &[RelationSpec::required(
            "producerId",
            &["ownerId", "ruralProducerId"],
            EntityKind::RuralProducer,
        )],
        initial_status: "pending",
    },
    KindSchema {
        kind: EntityKind::SoilAnalysisRequest,
        department: Department::Agriculture,
        fields: &[
            FieldSpec::integer("sampleCount", &["samples"])
                .lenient()
                .default_to(DefaultValue::Integer(1)),
            FieldSpec::text("intendedCrop", &["crop"]),
            FieldSpec::date("collectedOn", &["collectionDate", "date"]),
        ],
        relations: &[
            RelationSpec::required("propertyId", &["ruralPropertyId"], EntityKind::RuralProperty),
        ],
        initial_status: "requested",
    },
    KindSchema {
        kind: EntityKind::LivestockRegistration,
        department: Department::Agriculture,
        fields: &[
            FieldSpec::text("species", &["animalType"]).required(),
            FieldSpec::integer("headCount", &["quantity", "heads"]).required(),
            FieldSpec::text("purpose", &["aptitude"]),
            FieldSpec::date("lastVaccination", &["vaccinationDate"]),
        ],
        relations: &[
            RelationSpec::required("propertyId", &["ruralPropertyId"], EntityKind::RuralProperty),
        ],
        initial_status: "registered",
    },
    KindSchema {
        kind: EntityKind::FarmersMarketRegistration,
        department: Department::Agriculture,
        fields: &[
            FieldSpec::text("products", &["productList", "items"]).required(),
            FieldSpec::text("market", &["fair", "location"]).required(),
            FieldSpec::flag("organic", &["isOrganic"]).default_to(DefaultValue::Bool(false)),
        ],
        relations: &[RelationSpec::required(
            "producerId",
            &["ownerId", "ruralProducerId"],
            EntityKind::RuralProducer,
        )],
        initial_status: "pending",
    },
    KindSchema {
        kind: EntityKind::RuralCreditSupport,
        department: Department::Agriculture,
        fields: &[
            FieldSpec::text("creditLine", &["program", "line"]).required(),
            FieldSpec::number("requestedAmount", &["amount", "value"]).required(),
            FieldSpec::text("projectDescription", &["description", "purpose"]),
        ],
        relations: &[
            RelationSpec::required(
                "producerId",
                &["ownerId", "ruralProducerId"],
                EntityKind::RuralProducer,
            ),
            RelationSpec::optional("propertyId", &["ruralPropertyId"], EntityKind::RuralProperty),
        ],
        initial_status: "under_review",
    },
];
