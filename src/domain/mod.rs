//! Core domain model: pure types and logic with no I/O.

pub mod chat;
pub mod foundation;
pub mod triage;
