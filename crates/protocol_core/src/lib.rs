//! Protocol-to-entity materialization engine.
//!
//! Turns a tenant-scoped protocol submission (kind tag + untyped payload)
//! into one validated, persisted record of a municipal entity kind. This
//! crate is the single source of truth for field, format and relation
//! rules.

pub mod config;
pub mod db;
pub mod engine;
pub mod error;
pub mod logging;
pub mod model;
pub mod registry;
pub mod relation;
pub mod repo;
pub mod resolve;
pub mod schema;
pub mod service;
pub mod validate;

pub use config::{ConfigError, EngineConfig};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use error::{MaterializeError, MaterializeResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::kind::{Department, EntityKind};
pub use model::record::{FieldValue, MaterializedRecord, RecordDraft, RecordId, ReferencedRecord};
pub use model::submission::{Payload, ProtocolId, Submission, SubmissionError, TenantId};
pub use registry::{KindRegistry, RegistryError};
pub use repo::record_repo::{
    RecordRepository, RepoError, RepoResult, SqliteRecordRepository, StoredRecord,
};
pub use service::protocol_service::ProtocolService;
pub use validate::{Format, FormatReason};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
