//! Use-case services around the materialization engine.
//!
//! # Responsibility
//! - Own transaction boundaries for callers that do not manage their own.
//! - Keep CLI/host layers decoupled from storage details.

pub mod protocol_service;
