//! Unified error handling for the activity-summary library.
//!
//! The aggregation pipeline itself is a total function over validated
//! records, so errors only arise at the ingestion boundary: payloads that
//! cannot be deserialized, and records that violate the data invariants.

use std::fmt;

/// Unified error type for activity-summary operations.
#[derive(Debug, Clone)]
pub enum SummaryError {
    /// Record payload could not be deserialized (bad JSON, unparseable date)
    MalformedRecord { message: String },
    /// Record violates a data invariant
    InvalidRecord { id: String, message: String },
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryError::MalformedRecord { message } => {
                write!(f, "Malformed record: {}", message)
            }
            SummaryError::InvalidRecord { id, message } => {
                write!(f, "Record '{}' is invalid: {}", id, message)
            }
        }
    }
}

impl std::error::Error for SummaryError {}

/// Result type alias for activity-summary operations.
pub type Result<T> = std::result::Result<T, SummaryError>;
