use crate::model::kind::{Department, EntityKind};
use crate::resolve::DefaultValue;
use crate::schema::{FieldSpec, KindSchema, RelationSpec};

pub(super) const SCHEMAS: &[KindSchema] = &[
    KindSchema {
        kind: EntityKind::Citizen,
        department: Department::SocialAssistance,
        fields: &[
            FieldSpec::text("name", &["fullName", "citizenName"]).required(),
            FieldSpec::cpf("cpf", &["document"]).required(),
            FieldSpec::date("birthDate", &["dateOfBirth"]),
            FieldSpec::email("email", &["contactEmail"]),
            FieldSpec::phone("phone", &["contactPhone", "telephone"]),
            FieldSpec::text("address", &["residence"]),
            FieldSpec::text("nis", &["nisNumber", "socialId"]),
        ],
        relations: &[],
        initial_status: "active",
    },
    KindSchema {
        kind: EntityKind::SocialAssistanceAttendance,
        department: Department::SocialAssistance,
        fields: &[
            FieldSpec::text("demand", &["reason", "description"]).required(),
            FieldSpec::text("serviceUnit", &["cras", "creas", "unit"]),
            FieldSpec::text("attendanceType", &["type"])
                .default_to(DefaultValue::Text("walk_in")),
            FieldSpec::datetime("attendedAt", &["date"]).default_to(DefaultValue::Now),
        ],
        relations: &[RelationSpec::required(
            "citizenId",
            &["beneficiaryId"],
            EntityKind::Citizen,
        )],
        initial_status: "open",
    },
    KindSchema {
        kind: EntityKind::BenefitRequest,
        department: Department::SocialAssistance,
        fields: &[
            FieldSpec::text("benefitType", &["benefit", "type"]).required(),
            FieldSpec::number("familyIncome", &["income", "monthlyIncome"]),
            FieldSpec::integer("householdSize", &["familyMembers", "members"]),
            FieldSpec::text("justification", &["reason"]),
        ],
        relations: &[RelationSpec::required(
            "citizenId",
            &["beneficiaryId"],
            EntityKind::Citizen,
        )],
        initial_status: "under_review",
    },
    KindSchema {
        kind: EntityKind::FoodBasketRequest,
        department: Department::SocialAssistance,
        fields: &[
            FieldSpec::text("requesterName", &["name", "citizenName"]).required(),
            FieldSpec::integer("householdSize", &["familyMembers"])
                .lenient()
                .default_to(DefaultValue::Integer(1)),
            FieldSpec::text("address", &["deliveryAddress"]),
            FieldSpec::phone("phone", &["contactPhone"]),
        ],
        relations: &[RelationSpec::optional(
            "citizenId",
            &["beneficiaryId"],
            EntityKind::Citizen,
        )],
        initial_status: "requested",
    },
    KindSchema {
        kind: EntityKind::SocialRegistryUpdate,
        department: Department::SocialAssistance,
        fields: &[
            FieldSpec::text("updateType", &["type", "changeType"]).required(),
            FieldSpec::text("details", &["description"]),
            FieldSpec::date("requestedOn", &["date"]).default_to(DefaultValue::Today),
        ],
        relations: &[RelationSpec::required(
            "citizenId",
            &["beneficiaryId"],
            EntityKind::Citizen,
        )],
        initial_status: "pending",
    },
    KindSchema {
        kind: EntityKind::ElderlyCareRequest,
        department: Department::SocialAssistance,
        fields: &[
            FieldSpec::text("elderName", &["name"]).required(),
            FieldSpec::integer("age", &[]),
            FieldSpec::text("careType", &["service", "type"]).required(),
            FieldSpec::text("caregiverName", &["responsibleName"]),
            FieldSpec::phone("caregiverPhone", &["phone"]),
        ],
        relations: &[RelationSpec::optional(
            "citizenId",
            &["beneficiaryId"],
            EntityKind::Citizen,
        )],
        initial_status: "requested",
    },
    KindSchema {
        kind: EntityKind::FamilyMonitoring,
        department: Department::SocialAssistance,
        fields: &[
            FieldSpec::text("situation", &["description", "context"]).required(),
            FieldSpec::text("riskLevel", &["risk"]).default_to(DefaultValue::Text("medium")),
            FieldSpec::date("nextVisit", &["followUpDate"]),
        ],
        relations: &[RelationSpec::required(
            "citizenId",
            &["referencePersonId"],
            EntityKind::Citizen,
        )],
        initial_status: "monitoring",
    },
    KindSchema {
        kind: EntityKind::ChildProtectionReport,
        department: Department::SocialAssistance,
        fields: &[
            FieldSpec::text("description", &["report", "details"]).required(),
            FieldSpec::text("location", &["address"]).required(),
            FieldSpec::text("childName", &["victimName"]),
            FieldSpec::flag("anonymous", &["isAnonymous"]).default_to(DefaultValue::Bool(true)),
            FieldSpec::phone("reporterPhone", &["phone"]),
        ],
        relations: &[],
        initial_status: "reported",
    },
    KindSchema {
        kind: EntityKind::SocialProgramEnrollment,
        department: Department::SocialAssistance,
        fields: &[
            FieldSpec::text("program", &["programName"]).required(),
            FieldSpec::date("enrolledOn", &["date"]).default_to(DefaultValue::Today),
            FieldSpec::number("familyIncome", &["income"]).lenient(),
        ],
        relations: &[RelationSpec::required(
            "citizenId",
            &["beneficiaryId"],
            EntityKind::Citizen,
        )],
        initial_status: "pending",
    },
];
