//! Shared types for the HR lookup service
//!
//! Error types, the error response body and the employee models used by
//! `hr-api`.

pub mod error;
pub mod models;
