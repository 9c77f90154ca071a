//! BigQuery client adapter.
//!
//! Wraps a single authenticated BigQuery connection and exposes the
//! operations the MCP server advertises as tools: dataset and table
//! discovery, table schemas, and read-only SQL queries.

pub mod client;
pub mod errors;
pub mod query;
pub mod schema;

pub use client::{BigQueryDatabase, QueryRow, Warehouse};
pub use errors::WarehouseError;
pub use query::sanitize_query;
pub use schema::TableField;
