use crate::model::kind::{Department, EntityKind};
use crate::resolve::DefaultValue;
use crate::schema::{FieldSpec, KindSchema, RelationSpec};

pub(super) const SCHEMAS: &[KindSchema] = &[
    KindSchema {
        kind: EntityKind::Student,
        department: Department::Education,
        fields: &[
            FieldSpec::text("name", &["studentName", "fullName"]).required(),
            FieldSpec::date("birthDate", &["dateOfBirth", "birthday"]).required(),
            FieldSpec::cpf("cpf", &["document"]),
            FieldSpec::text("guardianName", &["responsibleName", "parentName"]),
            FieldSpec::phone("guardianPhone", &["responsiblePhone", "phone"]),
            FieldSpec::text("address", &["residence"]),
        ],
        relations: &[],
        initial_status: "active",
    },
    KindSchema {
        kind: EntityKind::SchoolEnrollment,
        department: Department::Education,
        fields: &[
            FieldSpec::text("school", &["schoolName", "unit"]).required(),
            FieldSpec::text("grade", &["series", "year"]).required(),
            FieldSpec::text("shift", &["period"]).default_to(DefaultValue::Text("morning")),
            FieldSpec::integer("schoolYear", &["academicYear"]),
        ],
        relations: &[RelationSpec::required(
            "studentId",
            &["pupilId"],
            EntityKind::Student,
        )],
        initial_status: "pending",
    },
    KindSchema {
        kind: EntityKind::SchoolTransfer,
        department: Department::Education,
        fields: &[
            FieldSpec::text("originSchool", &["fromSchool"]).required(),
            FieldSpec::text("destinationSchool", &["toSchool"]).required(),
            FieldSpec::text("reason", &["motive"]),
        ],
        relations: &[
            RelationSpec::required("studentId", &["pupilId"], EntityKind::Student),
            RelationSpec::optional("enrollmentId", &[], EntityKind::SchoolEnrollment),
        ],
        initial_status: "under_review",
    },
    KindSchema {
        kind: EntityKind::SchoolTransportRequest,
        department: Department::Education,
        fields: &[
            FieldSpec::text("pickupAddress", &["address", "origin"]).required(),
            FieldSpec::text("school", &["schoolName"]).required(),
            FieldSpec::number("distanceKm", &["distance"]).lenient(),
            FieldSpec::flag("ruralArea", &["isRural"]).default_to(DefaultValue::Bool(false)),
        ],
        relations: &[RelationSpec::required(
            "studentId",
            &["pupilId"],
            EntityKind::Student,
        )],
        initial_status: "requested",
    },
    KindSchema {
        kind: EntityKind::SpecialEducationSupport,
        department: Department::Education,
        fields: &[
            FieldSpec::text("needType", &["disability", "condition"]).required(),
            FieldSpec::text("supportRequested", &["support", "description"]).required(),
            FieldSpec::flag("hasMedicalReport", &["medicalReport"])
                .default_to(DefaultValue::Bool(false)),
        ],
        relations: &[RelationSpec::required(
            "studentId",
            &["pupilId"],
            EntityKind::Student,
        )],
        initial_status: "under_review",
    },
    KindSchema {
        kind: EntityKind::SchoolMealComplaint,
        department: Department::Education,
        fields: &[
            FieldSpec::text("school", &["schoolName"]).required(),
            FieldSpec::text("description", &["complaint", "details"]).required(),
            FieldSpec::date("occurredOn", &["date"]).default_to(DefaultValue::Today),
            FieldSpec::email("contactEmail", &["email"]),
        ],
        relations: &[],
        initial_status: "open",
    },
    KindSchema {
        kind: EntityKind::DayCareVacancyRequest,
        department: Department::Education,
        fields: &[
            FieldSpec::text("childName", &["name"]).required(),
            FieldSpec::date("childBirthDate", &["birthDate"]).required(),
            FieldSpec::text("guardianName", &["responsibleName"]).required(),
            FieldSpec::phone("guardianPhone", &["phone"]),
            FieldSpec::text("preferredUnit", &["daycare", "unit"]),
        ],
        relations: &[],
        initial_status: "waitlisted",
    },
    KindSchema {
        kind: EntityKind::AdultEducationEnrollment,
        department: Department::Education,
        fields: &[
            FieldSpec::text("name", &["studentName", "fullName"]).required(),
            FieldSpec::cpf("cpf", &["document"]).required(),
            FieldSpec::text("stage", &["level", "module"]).required(),
            FieldSpec::phone("phone", &["contactPhone"]),
        ],
        relations: &[],
        initial_status: "pending",
    },
];
