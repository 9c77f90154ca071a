//! Error types for the bq-mcp binary.

use std::fmt;
use std::io;

use bq_core::WarehouseError;
use bq_mcp::ServerError;

/// Defines the errors you might encounter running the server.
#[derive(Debug)]
pub enum CliError {
    Runtime(io::Error),
    Connect(WarehouseError),
    Serve(ServerError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Runtime(error) => {
                write!(f, "Failed to create async runtime: {}", error)
            }
            CliError::Connect(error) => {
                write!(f, "Failed to connect to BigQuery: {}", error)
            }
            CliError::Serve(error) => write!(f, "MCP server error: {}", error),
        }
    }
}

impl std::error::Error for CliError {}
