//! Protocol submission input.
//!
//! # Responsibility
//! - Carry tenant/protocol provenance together with the raw intake payload.
//!
//! # Invariants
//! - `tenant_id` and `protocol_id` are non-blank after `validate()`.
//! - A submission is never mutated by the materialization engine.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raw intake payload. Keys and value shapes are whatever the intake channel
/// collected.
pub type Payload = Map<String, Value>;

/// Tenant (municipality) isolation boundary identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TenantId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of the protocol (service request) a record originates from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtocolId(String);

impl ProtocolId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProtocolId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One citizen service request handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub tenant_id: TenantId,
    pub protocol_id: ProtocolId,
    /// Human-facing protocol number (e.g. `2024/000123`), when assigned.
    pub protocol_number: Option<String>,
    pub payload: Payload,
}

impl Submission {
    pub fn new(tenant_id: TenantId, protocol_id: ProtocolId, payload: Payload) -> Self {
        Self {
            tenant_id,
            protocol_id,
            protocol_number: None,
            payload,
        }
    }

    pub fn with_protocol_number(mut self, protocol_number: impl Into<String>) -> Self {
        self.protocol_number = Some(protocol_number.into());
        self
    }

    /// Builds a submission from a JSON value that must be an object.
    ///
    /// Non-object values are rejected rather than wrapped.
    pub fn from_json(
        tenant_id: TenantId,
        protocol_id: ProtocolId,
        payload: Value,
    ) -> Result<Self, SubmissionError> {
        match payload {
            Value::Object(map) => Ok(Self::new(tenant_id, protocol_id, map)),
            _ => Err(SubmissionError::PayloadNotObject),
        }
    }

    /// Checks provenance fields before any materialization work.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        if self.tenant_id.as_str().trim().is_empty() {
            return Err(SubmissionError::BlankTenantId);
        }
        if self.protocol_id.as_str().trim().is_empty() {
            return Err(SubmissionError::BlankProtocolId);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    BlankTenantId,
    BlankProtocolId,
    PayloadNotObject,
}

impl Display for SubmissionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTenantId => write!(f, "submission tenant id cannot be blank"),
            Self::BlankProtocolId => write!(f, "submission protocol id cannot be blank"),
            Self::PayloadNotObject => write!(f, "submission payload must be a JSON object"),
        }
    }
}

impl Error for SubmissionError {}

#[cfg(test)]
mod tests {
    use super::{ProtocolId, Submission, SubmissionError, TenantId};
    use serde_json::json;

    #[test]
    fn validate_rejects_blank_provenance() {
        let blank_tenant = Submission::new(TenantId::new("  "), ProtocolId::new("p-1"), Default::default());
        assert_eq!(blank_tenant.validate(), Err(SubmissionError::BlankTenantId));

        let blank_protocol = Submission::new(TenantId::new("t-1"), ProtocolId::new(""), Default::default());
        assert_eq!(blank_protocol.validate(), Err(SubmissionError::BlankProtocolId));
    }

    #[test]
    fn from_json_requires_object_payload() {
        let err = Submission::from_json(TenantId::new("t"), ProtocolId::new("p"), json!([1, 2]))
            .expect_err("array payload must be rejected");
        assert_eq!(err, SubmissionError::PayloadNotObject);

        let ok = Submission::from_json(TenantId::new("t"), ProtocolId::new("p"), json!({"a": 1}))
            .expect("object payload");
        assert_eq!(ok.payload.len(), 1);
        assert!(ok.validate().is_ok());
    }
}
