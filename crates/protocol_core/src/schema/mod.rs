//! Declarative per-kind materialization schemas.
//!
//! # Responsibility
//! - Describe, as data, what every record kind requires: fields, aliases,
//!   defaults, format validators, relations and initial status.
//! - Hold the municipal catalog of all kind schemas.
//!
//! # Invariants
//! - Field and relation names are unique within a kind.
//! - The canonical field name is always the highest-priority alias.
//! - Absence policy is explicit per field: `required`, `default` and
//!   `on_unparsable` never depend on payload contents.
//!
//! # See also
//! - docs/architecture/materialization.md

pub mod catalog;

use crate::model::kind::{Department, EntityKind};
use crate::resolve::DefaultValue;
use crate::validate::Format;
use serde::Serialize;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Names owned by the record envelope rather than by a kind.
const RESERVED_NAMES: &[&str] = &["status", "tenantId", "protocolId"];

/// Typed shape a field is coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Integer,
    Number,
    Bool,
    Date,
    DateTime,
}

/// Policy for a present value that cannot be coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unparsable {
    /// Raise a format error naming the field.
    Reject,
    /// Treat the value as absent and apply the field default.
    UseDefault,
}

/// One scalar field of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Synonym keys tried after `name`, in priority order.
    pub aliases: &'static [&'static str],
    pub field_type: FieldType,
    pub required: bool,
    pub format: Option<Format>,
    pub default: DefaultValue,
    pub on_unparsable: Unparsable,
}

impl FieldSpec {
    const fn base(name: &'static str, aliases: &'static [&'static str], field_type: FieldType) -> Self {
        Self {
            name,
            aliases,
            field_type,
            required: false,
            format: None,
            default: DefaultValue::None,
            on_unparsable: Unparsable::Reject,
        }
    }

    pub const fn text(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self::base(name, aliases, FieldType::Text)
    }

    pub const fn integer(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self::base(name, aliases, FieldType::Integer)
    }

    pub const fn number(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self::base(name, aliases, FieldType::Number)
    }

    pub const fn flag(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self::base(name, aliases, FieldType::Bool)
    }

    pub const fn date(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self::base(name, aliases, FieldType::Date)
    }

    pub const fn datetime(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self::base(name, aliases, FieldType::DateTime)
    }

    pub const fn cpf(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self::text(name, aliases).validated(Format::Cpf)
    }

    pub const fn email(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self::text(name, aliases).validated(Format::Email)
    }

    pub const fn phone(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self::text(name, aliases).validated(Format::Phone)
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn validated(self, format: Format) -> Self {
        Self {
            format: Some(format),
            ..self
        }
    }

    pub const fn default_to(self, default: DefaultValue) -> Self {
        Self { default, ..self }
    }

    /// Unparsable values fall back to the default instead of failing.
    pub const fn lenient(self) -> Self {
        Self {
            on_unparsable: Unparsable::UseDefault,
            ..self
        }
    }
}

/// Reference from one kind to a record of another kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelationSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub target: EntityKind,
    pub required: bool,
}

impl RelationSpec {
    pub const fn required(
        name: &'static str,
        aliases: &'static [&'static str],
        target: EntityKind,
    ) -> Self {
        Self {
            name,
            aliases,
            target,
            required: true,
        }
    }

    pub const fn optional(
        name: &'static str,
        aliases: &'static [&'static str],
        target: EntityKind,
    ) -> Self {
        Self {
            name,
            aliases,
            target,
            required: false,
        }
    }
}

/// Complete materialization contract of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KindSchema {
    pub kind: EntityKind,
    pub department: Department,
    pub fields: &'static [FieldSpec],
    pub relations: &'static [RelationSpec],
    /// Status assigned to every newly created record of this kind.
    pub initial_status: &'static str,
}

impl KindSchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn relation(&self, name: &str) -> Option<&'static RelationSpec> {
        self.relations.iter().find(|relation| relation.name == name)
    }

    /// Names whose absence fails materialization: required fields without a
    /// default, then required relations, in declaration order.
    pub fn required_names(&self) -> Vec<&'static str> {
        let fields = self
            .fields
            .iter()
            .filter(|field| field.required && field.default.is_none())
            .map(|field| field.name);
        let relations = self
            .relations
            .iter()
            .filter(|relation| relation.required)
            .map(|relation| relation.name);
        fields.chain(relations).collect()
    }

    /// Checks declaration-level invariants.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.initial_status.trim().is_empty() {
            return Err(SchemaError::BlankInitialStatus(self.kind));
        }

        // Canonical names and aliases share one namespace: a payload key may
        // feed at most one field or relation.
        let mut keys = BTreeSet::new();
        let declared = self
            .fields
            .iter()
            .map(|field| (field.name, field.aliases))
            .chain(
                self.relations
                    .iter()
                    .map(|relation| (relation.name, relation.aliases)),
            );
        for (name, aliases) in declared {
            if name.trim().is_empty() || aliases.iter().any(|alias| alias.trim().is_empty()) {
                return Err(SchemaError::BlankFieldName(self.kind));
            }
            for key in std::iter::once(name).chain(aliases.iter().copied()) {
                if !keys.insert(key) {
                    return Err(SchemaError::DuplicateField {
                        kind: self.kind,
                        field: key.to_string(),
                    });
                }
            }
        }
        if let Some(reserved) = RESERVED_NAMES.iter().find(|name| keys.contains(*name)) {
            return Err(SchemaError::ReservedField {
                kind: self.kind,
                field: (*reserved).to_string(),
            });
        }
        Ok(())
    }
}

/// Declaration-level schema problems detected at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    BlankInitialStatus(EntityKind),
    BlankFieldName(EntityKind),
    DuplicateField { kind: EntityKind, field: String },
    ReservedField { kind: EntityKind, field: String },
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankInitialStatus(kind) => write!(f, "{kind}: initial status cannot be blank"),
            Self::BlankFieldName(kind) => write!(f, "{kind}: field names and aliases cannot be blank"),
            Self::DuplicateField { kind, field } => {
                write!(f, "{kind}: name or alias `{field}` is declared more than once")
            }
            Self::ReservedField { kind, field } => {
                write!(f, "{kind}: field `{field}` is reserved")
            }
        }
    }
}

impl Error for SchemaError {}

#[cfg(test)]
mod tests {
    use super::{FieldSpec, FieldType, KindSchema, RelationSpec, SchemaError, Unparsable};
    use crate::model::kind::{Department, EntityKind};
    use crate::resolve::DefaultValue;
    use crate::validate::Format;

    const SAMPLE: KindSchema = KindSchema {
        kind: EntityKind::Vaccination,
        department: Department::Health,
        fields: &[
            FieldSpec::text("vaccine", &["vaccineName"]).required(),
            FieldSpec::text("dose", &[]).required().default_to(DefaultValue::Text("1")),
            FieldSpec::integer("lot", &[]).lenient(),
        ],
        relations: &[RelationSpec::required("patientId", &[], EntityKind::Citizen)],
        initial_status: "scheduled",
    };

    #[test]
    fn builders_compose_in_const_context() {
        const CPF: FieldSpec = FieldSpec::cpf("cpf", &["document"]).required();
        assert_eq!(CPF.field_type, FieldType::Text);
        assert_eq!(CPF.format, Some(Format::Cpf));
        assert!(CPF.required);
        assert_eq!(CPF.on_unparsable, Unparsable::Reject);
        assert_eq!(SAMPLE.field("lot").unwrap().on_unparsable, Unparsable::UseDefault);
    }

    #[test]
    fn lookups_find_fields_and_relations_by_canonical_name() {
        let relation = SAMPLE.relation("patientId").unwrap();
        assert_eq!(relation.target, EntityKind::Citizen);
        assert!(relation.required);
        assert!(SAMPLE.relation("vaccine").is_none());
        assert!(SAMPLE.field("vaccineName").is_none());
    }

    #[test]
    fn required_names_skip_defaulted_fields_and_include_relations() {
        assert_eq!(SAMPLE.required_names(), vec!["vaccine", "patientId"]);
    }

    #[test]
    fn validate_rejects_duplicate_and_reserved_names() {
        assert!(SAMPLE.validate().is_ok());

        const DUPLICATE: KindSchema = KindSchema {
            fields: &[FieldSpec::text("patientId", &[])],
            ..SAMPLE
        };
        assert!(matches!(
            DUPLICATE.validate(),
            Err(SchemaError::DuplicateField { .. })
        ));

        const ALIAS_CLASH: KindSchema = KindSchema {
            fields: &[
                FieldSpec::text("vaccine", &["vaccineName"]),
                FieldSpec::text("brand", &["vaccineName"]),
            ],
            ..SAMPLE
        };
        assert_eq!(
            ALIAS_CLASH.validate(),
            Err(SchemaError::DuplicateField {
                kind: EntityKind::Vaccination,
                field: "vaccineName".to_string(),
            })
        );

        const ALIAS_SHADOWS_NAME: KindSchema = KindSchema {
            fields: &[FieldSpec::text("vaccine", &["patientId"])],
            ..SAMPLE
        };
        assert!(matches!(
            ALIAS_SHADOWS_NAME.validate(),
            Err(SchemaError::DuplicateField { field, .. }) if field == "patientId"
        ));

        const RESERVED: KindSchema = KindSchema {
            fields: &[FieldSpec::text("status", &[])],
            relations: &[],
            ..SAMPLE
        };
        assert!(matches!(
            RESERVED.validate(),
            Err(SchemaError::ReservedField { .. })
        ));

        const BLANK_STATUS: KindSchema = KindSchema {
            initial_status: " ",
            ..SAMPLE
        };
        assert_eq!(
            BLANK_STATUS.validate(),
            Err(SchemaError::BlankInitialStatus(EntityKind::Vaccination))
        );
    }
}
