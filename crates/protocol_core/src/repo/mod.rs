//! Persistence boundary abstractions and SQLite implementation.
//!
//! # Responsibility
//! - Define the unit-of-work contract consumed by the materialization
//!   engine.
//! - Isolate SQLite query details from engine/service orchestration.
//!
//! # Invariants
//! - Repository writes only ever receive fully validated drafts.
//! - Repository APIs return semantic errors (`InvalidData`,
//!   `UninitializedConnection`) in addition to DB transport errors.

pub mod record_repo;
