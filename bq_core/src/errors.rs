//! Error types for warehouse operations.

use std::fmt;

use gcp_bigquery_client::error::BQError;

/// Defines the errors a warehouse operation can surface.
#[derive(Debug)]
pub enum WarehouseError {
    /// Input rejected before any warehouse call was made.
    Validation(String),
    /// Failure reported by the warehouse connection, carried as message text.
    Backend(String),
    /// The query wait elapsed without a result.
    Timeout { seconds: u64 },
}

impl fmt::Display for WarehouseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarehouseError::Validation(message) => write!(f, "{}", message),
            WarehouseError::Backend(message) => write!(f, "{}", message),
            WarehouseError::Timeout { seconds } => {
                write!(f, "Query timed out after {} seconds", seconds)
            }
        }
    }
}

impl std::error::Error for WarehouseError {}

impl From<BQError> for WarehouseError {
    fn from(err: BQError) -> Self {
        WarehouseError::Backend(err.to_string())
    }
}
