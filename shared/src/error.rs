//! Error types for page operations and the cached store

use thiserror::Error;

/// Reasons a create, edit or delete did not go through
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} is out of range")]
    OutOfRange { field: &'static str },

    #[error("Spent amount exceeds budget")]
    SpentExceedsBudget,

    #[error("Record {id} not found")]
    NotFound { id: u32 },

    #[error("No record is being edited")]
    NotEditing,

    #[error("The add form is not open")]
    FormClosed,
}

/// Failures of the key-value store, the snapshot fetch or the data itself
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot fetch failed: {0}")]
    Fetch(String),

    #[error("Invalid record: {0}")]
    Invalid(#[from] ValidationError),
}
