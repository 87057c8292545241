use crate::model::kind::{Department, EntityKind};
use crate::resolve::DefaultValue;
use crate::schema::{FieldSpec, KindSchema, RelationSpec};

pub(super) const SCHEMAS: &[KindSchema] = &[
    KindSchema {
        kind: EntityKind::TouristAttraction,
        department: Department::Tourism,
        fields: &[
            FieldSpec::text("name", &["attractionName", "title"]).required(),
            FieldSpec::text("category", &["type"]).required(),
            FieldSpec::text("location", &["address"]).required(),
            FieldSpec::text("description", &["details"]),
            FieldSpec::text("openingHours", &["schedule", "hours"]),
            FieldSpec::flag("accessible", &["accessibility"]).default_to(DefaultValue::Bool(false)),
        ],
        relations: &[],
        initial_status: "pending_approval",
    },
    KindSchema {
        kind: EntityKind::TourismEvent,
        department: Department::Tourism,
        fields: &[
            FieldSpec::text("name", &["title", "eventName"]).required(),
            FieldSpec::date("startDate", &["date"]).required(),
            FieldSpec::date("endDate", &[]),
            FieldSpec::text("description", &["details"]),
        ],
        relations: &[RelationSpec::optional(
            "attractionId",
            &["touristAttractionId"],
            EntityKind::TouristAttraction,
        )],
        initial_status: "planned",
    },
    KindSchema {
        kind: EntityKind::TourGuideRegistration,
        department: Department::Tourism,
        fields: &[
            FieldSpec::text("name", &["guideName", "fullName"]).required(),
            FieldSpec::cpf("cpf", &["document"]).required(),
            FieldSpec::text("cadasturNumber", &["cadastur"]),
            FieldSpec::text("languages", &["idioms"]).default_to(DefaultValue::Text("pt-BR")),
            FieldSpec::email("email", &["contactEmail"]),
            FieldSpec::phone("phone", &["contactPhone"]),
        ],
        relations: &[],
        initial_status: "pending_approval",
    },
    KindSchema {
        kind: EntityKind::AccommodationRegistration,
        department: Department::Tourism,
        fields: &[
            FieldSpec::text("name", &["tradeName", "establishmentName"]).required(),
            FieldSpec::text("accommodationType", &["type"]).required(),
            FieldSpec::text("address", &["location"]).required(),
            FieldSpec::integer("rooms", &["roomCount", "units"]).required(),
            FieldSpec::email("email", &["contactEmail"]),
        ],
        relations: &[RelationSpec::optional(
            "businessId",
            &["tourismBusinessId"],
            EntityKind::TourismBusinessRegistration,
        )],
        initial_status: "pending_approval",
    },
    KindSchema {
        kind: EntityKind::TourismBusinessRegistration,
        department: Department::Tourism,
        fields: &[
            FieldSpec::text("tradeName", &["name", "companyName"]).required(),
            FieldSpec::text("cnpj", &["companyDocument"]).required(),
            FieldSpec::text("segment", &["activity", "category"]).required(),
            FieldSpec::email("email", &["contactEmail"]),
            FieldSpec::phone("phone", &["contactPhone"]),
        ],
        relations: &[],
        initial_status: "pending_approval",
    },
];
