//! Protocol submission service.
//!
//! # Responsibility
//! - Run one submission inside its own SQLite transaction.
//!
//! # Invariants
//! - Unknown or unregistered kinds fail before a transaction is opened.
//! - The transaction is committed only when materialization succeeded.
//! - Any failure leaves storage untouched (the transaction is dropped).

use crate::error::{MaterializeError, MaterializeResult};
use crate::model::kind::EntityKind;
use crate::model::record::MaterializedRecord;
use crate::model::submission::Submission;
use crate::registry::KindRegistry;
use crate::repo::record_repo::SqliteRecordRepository;
use log::{info, warn};
use rusqlite::Connection;

/// Transactional entry point over a shared kind registry.
pub struct ProtocolService<'r> {
    registry: &'r KindRegistry,
}

impl<'r> ProtocolService<'r> {
    pub fn new(registry: &'r KindRegistry) -> Self {
        Self { registry }
    }

    /// Materializes a submission tagged with a raw kind name.
    pub fn submit_tag(
        &self,
        conn: &mut Connection,
        tag: &str,
        submission: &Submission,
    ) -> MaterializeResult<MaterializedRecord> {
        let kind = EntityKind::parse(tag).ok_or_else(|| MaterializeError::UnknownEntityKind {
            kind: tag.trim().to_string(),
        })?;
        self.submit(conn, kind, submission)
    }

    pub fn submit(
        &self,
        conn: &mut Connection,
        kind: EntityKind,
        submission: &Submission,
    ) -> MaterializeResult<MaterializedRecord> {
        if !self.registry.is_supported(kind) {
            return Err(MaterializeError::UnknownEntityKind {
                kind: kind.to_string(),
            });
        }
        self.in_transaction(conn, submission, |registry, repo| {
            registry.dispatch(kind, submission, repo)
        })
    }

    fn in_transaction(
        &self,
        conn: &mut Connection,
        submission: &Submission,
        work: impl FnOnce(
            &KindRegistry,
            &SqliteRecordRepository<'_>,
        ) -> MaterializeResult<MaterializedRecord>,
    ) -> MaterializeResult<MaterializedRecord> {
        let tx = conn.transaction()?;
        let outcome = {
            let repo = SqliteRecordRepository::try_new(&tx)?;
            work(self.registry, &repo)
        };

        match outcome {
            Ok(record) => {
                tx.commit()?;
                info!(
                    "event=protocol_submit module=service status=ok kind={} tenant_id={} protocol_id={} record_id={}",
                    record.kind, record.tenant_id, record.protocol_id, record.id
                );
                Ok(record)
            }
            Err(err) => {
                warn!(
                    "event=protocol_submit module=service status=rolled_back tenant_id={} protocol_id={} error_code={}",
                    submission.tenant_id,
                    submission.protocol_id,
                    err.code()
                );
                Err(err)
            }
        }
    }
}
