//! Record persistence boundary and its SQLite implementation.
//!
//! # Responsibility
//! - Define the unit-of-work contract the engine needs: one tenant-aware
//!   lookup and one write primitive.
//! - Keep SQL details of the generic `records` table inside core.
//!
//! # Invariants
//! - `find_by_id` reports the owning tenant; tenant checks are the caller's
//!   job, never silently filtered here.
//! - `create_record` writes exactly one row per call.
//! - Read paths reject invalid persisted state instead of masking it.
//!
//! # See also
//! - docs/architecture/materialization.md

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::kind::EntityKind;
use crate::model::record::{MaterializedRecord, RecordDraft, RecordId, ReferencedRecord};
use crate::model::submission::{ProtocolId, TenantId};
use chrono::Utc;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const RECORD_SELECT_SQL: &str = "SELECT
    id,
    kind,
    tenant_id,
    protocol_id,
    protocol_number,
    status,
    attributes,
    created_at
FROM records";

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Connection has not been migrated to the schema this binary expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Record row as read back from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub id: RecordId,
    pub kind: EntityKind,
    pub tenant_id: TenantId,
    pub protocol_id: ProtocolId,
    pub protocol_number: Option<String>,
    pub status: String,
    pub attributes: Map<String, Value>,
    pub created_at: i64,
}

/// Unit of work handed to the engine for one materialization.
///
/// Implementations are expected to be bound to a transaction owned by the
/// caller.
pub trait RecordRepository {
    /// Looks up a record of `kind` by id in any tenant.
    fn find_by_id(&self, kind: EntityKind, id: &str) -> RepoResult<Option<ReferencedRecord>>;
    /// Persists one validated draft.
    fn create_record(&self, draft: &RecordDraft) -> RepoResult<MaterializedRecord>;
}

/// SQLite-backed record repository.
///
/// Works over a plain connection or a `rusqlite::Transaction` (through
/// deref), so the caller keeps control of commit/rollback.
pub struct SqliteRecordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    pub fn get_record(&self, id: RecordId) -> RepoResult<Option<StoredRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RECORD_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_record_row(row)?));
        }
        Ok(None)
    }

    /// Lists records created from one protocol, oldest first.
    pub fn list_by_protocol(
        &self,
        tenant_id: &TenantId,
        protocol_id: &ProtocolId,
    ) -> RepoResult<Vec<StoredRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{RECORD_SELECT_SQL}
             WHERE tenant_id = ?1 AND protocol_id = ?2
             ORDER BY created_at ASC, id ASC;"
        ))?;
        let mut rows = stmt.query(params![tenant_id.as_str(), protocol_id.as_str()])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_record_row(row)?);
        }
        Ok(records)
    }

    /// Counts records, optionally restricted to one kind.
    pub fn count_records(&self, kind: Option<EntityKind>) -> RepoResult<u64> {
        let mut sql = "SELECT COUNT(*) FROM records".to_string();
        let mut bind_values: Vec<SqlValue> = Vec::new();
        if let Some(kind) = kind {
            sql.push_str(" WHERE kind = ?");
            bind_values.push(SqlValue::Text(kind.as_str().to_string()));
        }
        let count: i64 = self
            .conn
            .query_row(&sql, params_from_iter(bind_values), |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative record count `{count}`")))
    }
}

impl RecordRepository for SqliteRecordRepository<'_> {
    fn find_by_id(&self, kind: EntityKind, id: &str) -> RepoResult<Option<ReferencedRecord>> {
        let found = self
            .conn
            .query_row(
                "SELECT id, tenant_id FROM records WHERE id = ?1 AND kind = ?2;",
                params![id, kind.as_str()],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        Ok(found.map(|(id, tenant_id)| ReferencedRecord {
            id,
            kind,
            tenant_id: TenantId::new(tenant_id),
        }))
    }

    fn create_record(&self, draft: &RecordDraft) -> RepoResult<MaterializedRecord> {
        let id = Uuid::new_v4();
        let created_at = Utc::now().timestamp_millis();
        let attributes: Map<String, Value> = draft
            .attributes
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();

        self.conn.execute(
            "INSERT INTO records (
                id,
                kind,
                tenant_id,
                protocol_id,
                protocol_number,
                status,
                attributes,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                id.to_string(),
                draft.kind.as_str(),
                draft.tenant_id.as_str(),
                draft.protocol_id.as_str(),
                draft.protocol_number.as_deref(),
                draft.status.as_str(),
                Value::Object(attributes).to_string(),
                created_at,
            ],
        )?;

        Ok(MaterializedRecord {
            id,
            kind: draft.kind,
            tenant_id: draft.tenant_id.clone(),
            protocol_id: draft.protocol_id.clone(),
            protocol_number: draft.protocol_number.clone(),
            status: draft.status.clone(),
            attributes: draft.attributes.clone(),
            created_at,
        })
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }
    Ok(())
}

fn parse_record_row(row: &Row<'_>) -> RepoResult<StoredRecord> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in records.id"))
    })?;

    let kind_text: String = row.get("kind")?;
    let kind = EntityKind::parse(&kind_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid kind `{kind_text}` in records.kind"))
    })?;

    let attributes_text: String = row.get("attributes")?;
    let attributes = match serde_json::from_str::<Value>(&attributes_text) {
        Ok(Value::Object(map)) => map,
        _ => {
            return Err(RepoError::InvalidData(format!(
                "records.attributes of `{id_text}` is not a JSON object"
            )));
        }
    };

    Ok(StoredRecord {
        id,
        kind,
        tenant_id: TenantId::new(row.get::<_, String>("tenant_id")?),
        protocol_id: ProtocolId::new(row.get::<_, String>("protocol_id")?),
        protocol_number: row.get("protocol_number")?,
        status: row.get("status")?,
        attributes,
        created_at: row.get("created_at")?,
    })
}
