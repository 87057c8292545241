//! Domain model for protocol submissions and materialized records.
//!
//! # Responsibility
//! - Define the closed set of record kinds a protocol can materialize into.
//! - Define the submission input and the record output shapes.
//!
//! # Invariants
//! - Every record carries the tenant and protocol of the submission that
//!   created it.
//! - `EntityKind` is closed; unknown tags never become a kind value.
//!
//! # See also
//! - docs/architecture/materialization.md

pub mod kind;
pub mod record;
pub mod submission;
