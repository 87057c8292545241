//! Record kind tags and department classification.
//!
//! # Responsibility
//! - Enumerate every service-record kind a protocol can target.
//! - Provide stable string tags for wire/storage representation.
//!
//! # Invariants
//! - `as_str()` and `parse()` are exact inverses for every variant.
//! - `EntityKind::ALL` lists each variant exactly once, in declaration order.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

macro_rules! entity_kinds {
    ($($variant:ident),+ $(,)?) => {
        /// Closed set of service-record kinds.
        ///
        /// The tag string of each kind is its variant name, e.g.
        /// `"HealthAttendance"`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum EntityKind {
            $($variant),+
        }

        impl EntityKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [EntityKind] = &[$(EntityKind::$variant),+];

            /// Returns the stable tag for this kind.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(EntityKind::$variant => stringify!($variant)),+
                }
            }

            /// Parses a tag into a kind. Surrounding whitespace is ignored;
            /// matching is case-sensitive.
            pub fn parse(value: &str) -> Option<Self> {
                match value.trim() {
                    $(stringify!($variant) => Some(EntityKind::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

entity_kinds! {
    // health
    HealthAttendance,
    Vaccination,
    MedicalAppointment,
    ExamRequest,
    MedicationDispensing,
    HomeVisit,
    PatientTransport,
    HealthProgramEnrollment,
    EpidemiologicalNotification,
    DentalAppointment,
    SpecialistReferral,
    // education
    Student,
    SchoolEnrollment,
    SchoolTransfer,
    SchoolTransportRequest,
    SpecialEducationSupport,
    SchoolMealComplaint,
    DayCareVacancyRequest,
    AdultEducationEnrollment,
    // social assistance
    Citizen,
    SocialAssistanceAttendance,
    BenefitRequest,
    FoodBasketRequest,
    SocialRegistryUpdate,
    ElderlyCareRequest,
    FamilyMonitoring,
    ChildProtectionReport,
    SocialProgramEnrollment,
    // agriculture
    RuralProducer,
    RuralProperty,
    TechnicalAssistance,
    MachineryRequest,
    SeedDistribution,
    SoilAnalysisRequest,
    LivestockRegistration,
    FarmersMarketRegistration,
    RuralCreditSupport,
    // culture
    CulturalEvent,
    ArtistRegistration,
    CulturalSpaceBooking,
    CulturalProject,
    HeritageRegistration,
    CulturalWorkshopEnrollment,
    LibraryMembership,
    // sports
    Athlete,
    SportsTeam,
    SportsFacilityBooking,
    SportsEvent,
    SportsCompetitionRegistration,
    SportsSchoolEnrollment,
    // housing
    HousingProgramApplication,
    HousingInspection,
    LandRegularization,
    HousingImprovementRequest,
    RentalAssistance,
    HousingWaitlistEntry,
    // environment
    EnvironmentalLicense,
    EnvironmentalComplaint,
    TreeRemovalRequest,
    SeedlingRequest,
    WasteCollectionRequest,
    AnimalRescue,
    EnvironmentalEducationActivity,
    BurningAuthorization,
    // security
    SecurityIncident,
    PatrolRequest,
    TrafficOccurrence,
    SurveillanceCameraRequest,
    LostDocumentReport,
    EventSecurityRequest,
    CivilDefenseAlert,
    // urban planning
    BuildingPermit,
    OccupancyCertificate,
    ZoningConsultation,
    SubdivisionApproval,
    StreetNumbering,
    DemolitionPermit,
    UrbanIrregularityReport,
    // tourism
    TouristAttraction,
    TourismEvent,
    TourGuideRegistration,
    AccommodationRegistration,
    TourismBusinessRegistration,
    // public works
    StreetPavingRequest,
    PotholeRepair,
    DrainageRequest,
    BridgeMaintenance,
    PublicBuildingMaintenance,
    SidewalkRepair,
    // public services
    StreetLightingRepair,
    CemeteryService,
    StreetCleaningRequest,
    WaterSupplyComplaint,
    PublicTransportComplaint,
    PestControlRequest,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Municipal department owning a record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Health,
    Education,
    SocialAssistance,
    Agriculture,
    Culture,
    Sports,
    Housing,
    Environment,
    Security,
    UrbanPlanning,
    Tourism,
    PublicWorks,
    PublicServices,
}

impl Department {
    pub const ALL: &'static [Department] = &[
        Self::Health,
        Self::Education,
        Self::SocialAssistance,
        Self::Agriculture,
        Self::Culture,
        Self::Sports,
        Self::Housing,
        Self::Environment,
        Self::Security,
        Self::UrbanPlanning,
        Self::Tourism,
        Self::PublicWorks,
        Self::PublicServices,
    ];

    /// Parses the snake_case department name.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.iter().copied().find(|dept| dept.as_str() == value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Education => "education",
            Self::SocialAssistance => "social_assistance",
            Self::Agriculture => "agriculture",
            Self::Culture => "culture",
            Self::Sports => "sports",
            Self::Housing => "housing",
            Self::Environment => "environment",
            Self::Security => "security",
            Self::UrbanPlanning => "urban_planning",
            Self::Tourism => "tourism",
            Self::PublicWorks => "public_works",
            Self::PublicServices => "public_services",
        }
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Department, EntityKind};
    use std::collections::HashSet;

    #[test]
    fn department_names_parse_back() {
        for dept in Department::ALL {
            assert_eq!(Department::parse(dept.as_str()), Some(*dept));
        }
        assert_eq!(Department::parse("finance"), None);
    }

    #[test]
    fn tags_round_trip_for_every_kind() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::parse(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn all_lists_each_kind_once() {
        let unique: HashSet<_> = EntityKind::ALL.iter().collect();
        assert_eq!(unique.len(), EntityKind::ALL.len());
        assert_eq!(EntityKind::ALL.len(), 95);
    }

    #[test]
    fn parse_trims_but_stays_case_sensitive() {
        assert_eq!(
            EntityKind::parse("  Vaccination "),
            Some(EntityKind::Vaccination)
        );
        assert_eq!(EntityKind::parse("vaccination"), None);
        assert_eq!(EntityKind::parse(""), None);
    }

    #[test]
    fn serializes_as_variant_tag() {
        let json = serde_json::to_value(EntityKind::RuralProperty).unwrap();
        assert_eq!(json, serde_json::json!("RuralProperty"));
    }
}
