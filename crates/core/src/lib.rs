//! Shared domain types and errors for the catalog backend.

pub mod error;
pub mod types;
