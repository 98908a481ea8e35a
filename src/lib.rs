//! Nyaya - Legal Query Triage Assistant
//!
//! A rule-based chat backend that classifies legal questions into Indian
//! law domains and composes advisory replies with landmark case
//! suggestions.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
