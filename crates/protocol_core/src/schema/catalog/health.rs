use crate::model::kind::{Department, EntityKind};
use crate::resolve::DefaultValue;
use crate::schema::{FieldSpec, KindSchema, RelationSpec};

pub(super) const SCHEMAS: &[KindSchema] = &[
    KindSchema {
        kind: EntityKind::HealthAttendance,
        department: Department::Health,
        fields: &[
            FieldSpec::text("patientName", &["citizenName", "name"]).required(),
            FieldSpec::cpf("cpf", &["patientCpf", "document"]).required(),
            FieldSpec::phone("phone", &["contactPhone", "telephone"]),
            FieldSpec::text("complaint", &["symptoms", "description"]),
            FieldSpec::text("priority", &["riskClassification"])
                .default_to(DefaultValue::Text("normal")),
            FieldSpec::datetime("attendedAt", &["attendanceDate", "date"])
                .default_to(DefaultValue::Now),
        ],
        relations: &[RelationSpec::optional(
            "citizenId",
            &["patientId"],
            EntityKind::Citizen,
        )],
        initial_status: "waiting",
    },
    KindSchema {
        kind: EntityKind::Vaccination,
        department: Department::Health,
        fields: &[
            FieldSpec::text("vaccine", &["vaccineName", "immunobiological"]).required(),
            FieldSpec::text("dose", &["doseNumber"]).default_to(DefaultValue::Text("1")),
            FieldSpec::text("lot", &["batch", "lotNumber"]),
            FieldSpec::date("applicationDate", &["date", "appliedOn"])
                .default_to(DefaultValue::Today),
        ],
        relations: &[RelationSpec::required(
            "patientId",
            &["citizenId"],
            EntityKind::Citizen,
        )],
        initial_status: "scheduled",
    },
    KindSchema {
        kind: EntityKind::MedicalAppointment,
        department: Department::Health,
        fields: &[
            FieldSpec::text("patientName", &["citizenName", "name"]).required(),
            FieldSpec::text("specialty", &["medicalSpecialty"]).required(),
            FieldSpec::datetime("scheduledFor", &["appointmentDate", "date"]),
            FieldSpec::phone("phone", &["contactPhone"]),
            FieldSpec::text("healthUnit", &["unit", "ubs"]),
        ],
        relations: &[RelationSpec::optional(
            "patientId",
            &["citizenId"],
            EntityKind::Citizen,
        )],
        initial_status: "scheduled",
    },
    KindSchema {
        kind: EntityKind::ExamRequest,
        department: Department::Health,
        fields: &[
            FieldSpec::text("patientName", &["citizenName", "name"]).required(),
            FieldSpec::text("examType", &["exam", "examName"]).required(),
            FieldSpec::text("requestingPhysician", &["physician", "doctor"]),
            FieldSpec::flag("urgent", &["isUrgent"]).default_to(DefaultValue::Bool(false)),
            FieldSpec::date("requestDate", &["date"]).default_to(DefaultValue::Today),
        ],
        relations: &[RelationSpec::optional(
            "appointmentId",
            &["consultationId"],
            EntityKind::MedicalAppointment,
        )],
        initial_status: "requested",
    },
    KindSchema {
        kind: EntityKind::MedicationDispensing,
        department: Department::Health,
        fields: &[
            FieldSpec::text("medication", &["medicine", "drug"]).required(),
            FieldSpec::integer("quantity", &["amount", "qty"])
                .lenient()
                .default_to(DefaultValue::Integer(1)),
            FieldSpec::text("prescriptionNumber", &["prescription"]),
            FieldSpec::date("dispensedOn", &["date"]).default_to(DefaultValue::Today),
        ],
        relations: &[RelationSpec::required(
            "patientId",
            &["citizenId"],
            EntityKind::Citizen,
        )],
        initial_status: "pending",
    },
    KindSchema {
        kind: EntityKind::HomeVisit,
        department: Department::Health,
        fields: &[
            FieldSpec::text("address", &["residence", "location"]).required(),
            FieldSpec::text("reason", &["motive", "description"]).required(),
            FieldSpec::date("visitDate", &["scheduledDate", "date"]),
            FieldSpec::text("healthAgent", &["agent", "acs"]),
        ],
        relations: &[RelationSpec::optional(
            "patientId",
            &["citizenId"],
            EntityKind::Citizen,
        )],
        initial_status: "scheduled",
    },
    KindSchema {
        kind: EntityKind::PatientTransport,
        department: Department::Health,
        fields: &[
            FieldSpec::text("origin", &["from", "pickupAddress"]).required(),
            FieldSpec::text("destination", &["to", "destinationUnit"]).required(),
            FieldSpec::datetime("departureAt", &["travelDate", "date"]).required(),
            FieldSpec::flag("needsCompanion", &["companion"])
                .default_to(DefaultValue::Bool(false)),
            FieldSpec::flag("wheelchair", &["accessibility"]).default_to(DefaultValue::Bool(false)),
        ],
        relations: &[RelationSpec::required(
            "patientId",
            &["citizenId"],
            EntityKind::Citizen,
        )],
        initial_status: "requested",
    },
    KindSchema {
        kind: EntityKind::HealthProgramEnrollment,
        department: Department::Health,
        fields: &[
            FieldSpec::text("program", &["programName"]).required(),
            FieldSpec::text("participantName", &["citizenName", "name"]).required(),
            FieldSpec::cpf("cpf", &["document"]),
            FieldSpec::date("enrolledOn", &["date"]).default_to(DefaultValue::Today),
        ],
        relations: &[],
        initial_status: "active",
    },
    KindSchema {
        kind: EntityKind::EpidemiologicalNotification,
        department: Department::Health,
        fields: &[
            FieldSpec::text("disease", &["condition", "cid"]).required(),
            FieldSpec::date("symptomOnset", &["onsetDate"]),
            FieldSpec::text("neighborhood", &["district", "bairro"]),
            FieldSpec::integer("caseCount", &["cases"])
                .lenient()
                .default_to(DefaultValue::Integer(1)),
            FieldSpec::datetime("notifiedAt", &["date"]).default_to(DefaultValue::Now),
        ],
        relations: &[RelationSpec::optional(
            "patientId",
            &["citizenId"],
            EntityKind::Citizen,
        )],
        initial_status: "under_investigation",
    },
    KindSchema {
        kind: EntityKind::DentalAppointment,
        department: Department::Health,
        fields: &[
            FieldSpec::text("patientName", &["citizenName", "name"]).required(),
            FieldSpec::text("procedure", &["treatment"]).default_to(DefaultValue::Text("evaluation")),
            FieldSpec::datetime("scheduledFor", &["appointmentDate", "date"]),
            FieldSpec::phone("phone", &["contactPhone"]),
        ],
        relations: &[],
        initial_status: "scheduled",
    },
    KindSchema {
        kind: EntityKind::SpecialistReferral,
        department: Department::Health,
        fields: &[
            FieldSpec::text("specialty", &["medicalSpecialty"]).required(),
            FieldSpec::text("clinicalJustification", &["justification", "reason"]).required(),
            FieldSpec::text("priority", &["riskClassification"])
                .default_to(DefaultValue::Text("routine")),
        ],
        relations: &[
            RelationSpec::required("patientId", &["citizenId"], EntityKind::Citizen),
            RelationSpec::optional(
                "appointmentId",
                &["consultationId"],
                EntityKind::MedicalAppointment,
            ),
        ],
        initial_status: "pending_regulation",
    },
];
