//! Municipal catalog: one schema per `EntityKind`, grouped by department.
//!
//! Alias lists are the documented priority order for each field: the
//! canonical name first, then the aliases left to right.

mod agriculture;
mod culture;
mod education;
mod environment;
mod health;
mod housing;
mod public_services;
mod public_works;
mod security;
mod social;
mod sports;
mod tourism;
mod urban;

use super::KindSchema;

const DEPARTMENTS: &[&[KindSchema]] = &[
    health::SCHEMAS,
    education::SCHEMAS,
    social::SCHEMAS,
    agriculture::SCHEMAS,
    culture::SCHEMAS,
    sports::SCHEMAS,
    housing::SCHEMAS,
    environment::SCHEMAS,
    security::SCHEMAS,
    urban::SCHEMAS,
    tourism::SCHEMAS,
    public_works::SCHEMAS,
    public_services::SCHEMAS,
];

/// Every catalog schema, department by department.
pub fn all() -> impl Iterator<Item = &'static KindSchema> {
    DEPARTMENTS.iter().flat_map(|schemas| schemas.iter())
}
