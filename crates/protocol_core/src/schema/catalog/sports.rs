use crate::model::kind::{Department, EntityKind};
use crate::resolve::DefaultValue;
use crate::schema::{FieldSpec, KindSchema, RelationSpec};

pub(super) const SCHEMAS: &[KindSchema] = &[
    KindSchema {
        kind: EntityKind::Athlete,
        department: Department::Sports,
        fields: &[
            FieldSpec::text("name", &["athleteName", "fullName"]).required(),
            FieldSpec::date("birthDate", &["dateOfBirth"]).required(),
            FieldSpec::text("modality", &["sport"]).required(),
            FieldSpec::cpf("cpf", &["document"]),
            FieldSpec::phone("phone", &["contactPhone"]),
        ],
        relations: &[RelationSpec::optional("teamId", &["clubId"], EntityKind::SportsTeam)],
        initial_status: "active",
    },
    KindSchema {
        kind: EntityKind::SportsTeam,
        department: Department::Sports,
        fields: &[
            FieldSpec::text("name", &["teamName"]).required(),
            FieldSpec::text("modality", &["sport"]).required(),
            FieldSpec::text("category", &["ageGroup", "division"]),
            FieldSpec::text("coachName", &["coach", "responsibleName"]),
            FieldSpec::phone("contactPhone", &["phone"]),
        ],
        relations: &[],
        initial_status: "active",
    },
    KindSchema {
        kind: EntityKind::SportsFacilityBooking,
        department: Department::Sports,
        fields: &[
            FieldSpec::text("facility", &["venue", "court", "gym"]).required(),
            FieldSpec::datetime("startsAt", &["startDate", "date"]).required(),
            FieldSpec::datetime("endsAt", &["endDate"]),
            FieldSpec::text("activity", &["purpose"]),
            FieldSpec::integer("participants", &["players"]).lenient(),
        ],
        relations: &[RelationSpec::optional("teamId", &["clubId"], EntityKind::SportsTeam)],
        initial_status: "requested",
    },
    KindSchema {
        kind: EntityKind::SportsEvent,
        department: Department::Sports,
        fields: &[
            FieldSpec::text("name", &["title", "eventName"]).required(),
            FieldSpec::text("modality", &["sport"]).required(),
            FieldSpec::date("startDate", &["date"]).required(),
            FieldSpec::date("endDate", &[]),
            FieldSpec::text("venue", &["location"]),
        ],
        relations: &[],
        initial_status: "planned",
    },
    KindSchema {
        kind: EntityKind::SportsCompetitionRegistration,
        department: Department::Sports,
        fields: &[
            FieldSpec::text("category", &["division", "ageGroup"]),
            FieldSpec::date("registeredOn", &["date"]).default_to(DefaultValue::Today),
        ],
        relations: &[
            RelationSpec::required("eventId", &["competitionId"], EntityKind::SportsEvent),
            RelationSpec::required("teamId", &["clubId"], EntityKind::SportsTeam),
            RelationSpec::optional("captainId", &["athleteId"], EntityKind::Athlete),
        ],
        initial_status: "pending",
    },
    KindSchema {
        kind: EntityKind::SportsSchoolEnrollment,
        department: Department::Sports,
        fields: &[
            FieldSpec::text("participantName", &["name", "studentName"]).required(),
            FieldSpec::date("birthDate", &["dateOfBirth"]).required(),
            FieldSpec::text("modality", &["sport"]).required(),
            FieldSpec::text("guardianName", &["responsibleName"]),
            FieldSpec::phone("guardianPhone", &["phone"]),
            FieldSpec::flag("medicalClearance", &["healthCertificate"])
                .default_to(DefaultValue::Bool(false)),
        ],
        relations: &[],
        initial_status: "enrolled",
    },
];
