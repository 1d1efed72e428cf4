//! Error types for the dashboard engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// No order with the given identifier exists in the record store.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// No listing with the given identifier exists in the record store.
    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    /// A dataset contained the same identifier twice within one collection.
    #[error("Duplicate {kind} identifier in dataset: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// A dataset contained a negative or non-finite currency amount.
    #[error("Invalid {kind} amount in dataset: {id}")]
    InvalidAmount { kind: &'static str, id: String },

    /// Failed to read a dataset file or locate the data directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a dataset file.
    #[error("Dataset JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DashboardError {
    /// Lookup misses are treated as silent no-ops by the display layers.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DashboardError::OrderNotFound(_) | DashboardError::ListingNotFound(_)
        )
    }
}

/// Errors reading or parsing a headless command script.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// A line could not be parsed into a dashboard command.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// No commands were given.
    #[error("script contains no commands")]
    Empty,

    /// Failed to read the script file.
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
}
