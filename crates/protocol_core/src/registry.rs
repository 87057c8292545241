//! Entity kind registry and dispatch.
//!
//! # Responsibility
//! - Map each `EntityKind` to its declarative schema.
//! - Route a submission to the generic handler for its kind.
//!
//! # Invariants
//! - One schema per kind; registration rejects duplicates and malformed
//!   schemas.
//! - Unknown kinds fail before any payload is looked at.
//! - The registry holds no per-call state and is safe to share read-only.

use crate::engine::materialize;
use crate::error::{MaterializeError, MaterializeResult};
use crate::model::kind::{Department, EntityKind};
use crate::model::record::MaterializedRecord;
use crate::model::submission::Submission;
use crate::repo::record_repo::RecordRepository;
use crate::schema::{catalog, KindSchema, SchemaError};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateKind(EntityKind),
    InvalidSchema(SchemaError),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKind(kind) => write!(f, "entity kind already registered: {kind}"),
            Self::InvalidSchema(err) => write!(f, "invalid schema: {err}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidSchema(err) => Some(err),
            Self::DuplicateKind(_) => None,
        }
    }
}

impl From<SchemaError> for RegistryError {
    fn from(value: SchemaError) -> Self {
        Self::InvalidSchema(value)
    }
}

/// Kind-to-schema table used for dispatch.
#[derive(Debug, Default, Clone)]
pub struct KindRegistry {
    schemas: BTreeMap<EntityKind, &'static KindSchema>,
}

impl KindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the full municipal catalog.
    pub fn municipal() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for schema in catalog::all() {
            registry.register(schema)?;
        }
        Ok(registry)
    }

    /// Registers one schema.
    pub fn register(&mut self, schema: &'static KindSchema) -> Result<(), RegistryError> {
        schema.validate()?;
        if self.schemas.contains_key(&schema.kind) {
            return Err(RegistryError::DuplicateKind(schema.kind));
        }
        self.schemas.insert(schema.kind, schema);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn is_supported(&self, kind: EntityKind) -> bool {
        self.schemas.contains_key(&kind)
    }

    pub fn schema(&self, kind: EntityKind) -> Option<&'static KindSchema> {
        self.schemas.get(&kind).copied()
    }

    /// Registered kinds in declaration order of `EntityKind`.
    pub fn kinds(&self) -> Vec<EntityKind> {
        self.schemas.keys().copied().collect()
    }

    pub fn kinds_in(&self, department: Department) -> Vec<EntityKind> {
        self.schemas
            .values()
            .filter(|schema| schema.department == department)
            .map(|schema| schema.kind)
            .collect()
    }

    /// Materializes `submission` as a record of `kind`.
    pub fn dispatch<R: RecordRepository + ?Sized>(
        &self,
        kind: EntityKind,
        submission: &Submission,
        repo: &R,
    ) -> MaterializeResult<MaterializedRecord> {
        self.dispatch_at(kind, submission, repo, Utc::now())
    }

    /// Like [`Self::dispatch`] with an explicit clock for computed defaults.
    pub fn dispatch_at<R: RecordRepository + ?Sized>(
        &self,
        kind: EntityKind,
        submission: &Submission,
        repo: &R,
        now: DateTime<Utc>,
    ) -> MaterializeResult<MaterializedRecord> {
        let schema = self
            .schema(kind)
            .ok_or_else(|| MaterializeError::UnknownEntityKind {
                kind: kind.to_string(),
            })?;
        materialize(schema, submission, repo, now)
    }

    /// Dispatches on a raw kind tag as received from the protocol layer.
    pub fn dispatch_tag<R: RecordRepository + ?Sized>(
        &self,
        tag: &str,
        submission: &Submission,
        repo: &R,
    ) -> MaterializeResult<MaterializedRecord> {
        let kind = EntityKind::parse(tag).ok_or_else(|| MaterializeError::UnknownEntityKind {
            kind: tag.trim().to_string(),
        })?;
        self.dispatch(kind, submission, repo)
    }
}
