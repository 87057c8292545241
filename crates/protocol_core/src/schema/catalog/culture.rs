use crate::model::kind::{Department, EntityKind};
use crate::resolve::DefaultValue;
use crate::schema::{FieldSpec, KindSchema, RelationSpec};

pub(super) const SCHEMAS: &[KindSchema] = &[
    KindSchema {
        kind: EntityKind::CulturalEvent,
        department: Department::Culture,
        fields: &[
            FieldSpec::text("title", &["name", "eventName"]).required(),
            FieldSpec::datetime("startsAt", &["startDate", "date"]).required(),
            FieldSpec::datetime("endsAt", &["endDate"]),
            FieldSpec::text("venue", &["location", "place"]).required(),
            FieldSpec::integer("expectedAudience", &["audience", "capacity"]).lenient(),
            FieldSpec::flag("freeEntry", &["free"]).default_to(DefaultValue::Bool(true)),
        ],
        relations: &[],
        initial_status: "planned",
    },
    KindSchema {
        kind: EntityKind::ArtistRegistration,
        department: Department::Culture,
        fields: &[
            FieldSpec::text("name", &["artistName", "stageName"]).required(),
            FieldSpec::text("artisticArea", &["area", "segment", "language"]).required(),
            FieldSpec::cpf("cpf", &["document"]),
            FieldSpec::email("email", &["contactEmail"]),
            FieldSpec::phone("phone", &["contactPhone"]),
            FieldSpec::text("portfolio", &["portfolioUrl", "bio"]),
        ],
        relations: &[],
        initial_status: "pending_approval",
    },
    KindSchema {
        kind: EntityKind::CulturalSpaceBooking,
        department: Department::Culture,
        fields: &[
            FieldSpec::text("space", &["venue", "room"]).required(),
            FieldSpec::datetime("startsAt", &["startDate", "date"]).required(),
            FieldSpec::datetime("endsAt", &["endDate"]),
            FieldSpec::text("purpose", &["activity", "description"]).required(),
            FieldSpec::text("responsibleName", &["requesterName", "name"]),
        ],
        relations: &[RelationSpec::optional(
            "eventId",
            &["culturalEventId"],
            EntityKind::CulturalEvent,
        )],
        initial_status: "requested",
    },
    KindSchema {
        kind: EntityKind::CulturalProject,
        department: Department::Culture,
        fields: &[
            FieldSpec::text("title", &["projectName", "name"]).required(),
            FieldSpec::text("summary", &["description", "synopsis"]).required(),
            FieldSpec::number("budget", &["requestedAmount", "amount"]),
            FieldSpec::text("call", &["notice", "edital"]),
        ],
        relations: &[RelationSpec::required(
            "artistId",
            &["proponentId"],
            EntityKind::ArtistRegistration,
        )],
        initial_status: "submitted",
    },
    KindSchema {
        kind: EntityKind::HeritageRegistration,
        department: Department::Culture,
        fields: &[
            FieldSpec::text("name", &["assetName", "title"]).required(),
            FieldSpec::text("heritageType", &["type", "category"]).required(),
            FieldSpec::text("location", &["address"]),
            FieldSpec::text("historicalNotes", &["history", "description"]),
        ],
        relations: &[],
        initial_status: "under_review",
    },
    KindSchema {
        kind: EntityKind::CulturalWorkshopEnrollment,
        department: Department::Culture,
        fields: &[
            FieldSpec::text("workshop", &["course", "class"]).required(),
            FieldSpec::text("participantName", &["name", "studentName"]).required(),
            FieldSpec::date("participantBirthDate", &["birthDate"]),
            FieldSpec::phone("phone", &["contactPhone"]),
        ],
        relations: &[RelationSpec::optional(
            "citizenId",
            &["participantId"],
            EntityKind::Citizen,
        )],
        initial_status: "enrolled",
    },
    KindSchema {
        kind: EntityKind::LibraryMembership,
        department: Department::Culture,
        fields: &[
            FieldSpec::text("name", &["memberName", "fullName"]).required(),
            FieldSpec::cpf("cpf", &["document"]).required(),
            FieldSpec::email("email", &["contactEmail"]),
            FieldSpec::text("library", &["branch", "unit"])
                .default_to(DefaultValue::Text("central")),
        ],
        relations: &[],
        initial_status: "active",
    },
];
