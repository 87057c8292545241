use crate::model::kind::{Department, EntityKind};
use crate::resolve::DefaultValue;
use crate::schema::{FieldSpec, KindSchema, RelationSpec};

pub(super) const SCHEMAS: &[KindSchema] = &[
    KindSchema {
        kind: EntityKind::HousingProgramApplication,
        department: Department::Housing,
        fields: &[
            FieldSpec::text("applicantName", &["name", "citizenName"]).required(),
            FieldSpec::cpf("cpf", &["document"]).required(),
            FieldSpec::text("program", &["programName"]).required(),
            FieldSpec::number("familyIncome", &["income", "monthlyIncome"]),
            FieldSpec::integer("householdSize", &["familyMembers"]),
            FieldSpec::flag("hasDisabledMember", &["pcd"]).default_to(DefaultValue::Bool(false)),
            FieldSpec::phone("phone", &["contactPhone"]),
        ],
        relations: &[RelationSpec::optional(
            "citizenId",
            &["applicantId"],
            EntityKind::Citizen,
        )],
        initial_status: "under_review",
    },
    KindSchema {
        kind: EntityKind::HousingInspection,
        department: Department::Housing,
        fields: &[
            FieldSpec::text("address", &["location"]).required(),
            FieldSpec::text("reason", &["motive", "description"]).required(),
            FieldSpec::date("scheduledFor", &["inspectionDate", "date"]),
        ],
        relations: &[RelationSpec::optional(
            "applicationId",
            &["housingApplicationId"],
            EntityKind::HousingProgramApplication,
        )],
        initial_status: "scheduled",
    },
    KindSchema {
        kind: EntityKind::LandRegularization,
        department: Department::Housing,
        fields: &[
            FieldSpec::text("occupantName", &["name", "applicantName"]).required(),
            FieldSpec::cpf("cpf", &["document"]).required(),
            FieldSpec::text("address", &["location"]).required(),
            FieldSpec::number("lotArea", &["area"]),
            FieldSpec::integer("occupationYears", &["yearsOfOccupation"]),
        ],
        relations: &[],
        initial_status: "under_review",
    },
    KindSchema {
        kind: EntityKind::HousingImprovementRequest,
        department: Department::Housing,
        fields: &[
            FieldSpec::text("address", &["location"]).required(),
            FieldSpec::text("improvementType", &["type", "service"]).required(),
            FieldSpec::text("description", &["details"]),
        ],
        relations: &[RelationSpec::required(
            "citizenId",
            &["applicantId"],
            EntityKind::Citizen,
        )],
        initial_status: "requested",
    },
    KindSchema {
        kind: EntityKind::RentalAssistance,
        department: Department::Housing,
        fields: &[
            FieldSpec::number("monthlyRent", &["rent", "rentValue"]).required(),
            FieldSpec::text("reason", &["justification"]).required(),
            FieldSpec::integer("months", &["duration"])
                .lenient()
                .default_to(DefaultValue::Integer(6)),
        ],
        relations: &[RelationSpec::required(
            "citizenId",
            &["applicantId"],
            EntityKind::Citizen,
        )],
        initial_status: "under_review",
    },
    KindSchema {
        kind: EntityKind::HousingWaitlistEntry,
        department: Department::Housing,
        fields: &[
            FieldSpec::integer("priorityScore", &["score"])
                .lenient()
                .default_to(DefaultValue::Integer(0)),
            FieldSpec::date("enteredOn", &["date"]).default_to(DefaultValue::Today),
        ],
        relations: &[RelationSpec::required(
            "applicationId",
            &["housingApplicationId"],
            EntityKind::HousingProgramApplication,
        )],
        initial_status: "waiting",
    },
];
