//! Query tool implementation.

use bq_core::{QueryRow, Warehouse, WarehouseError};
use rmcp::schemars;
use serde_json::Value;

/// Parameters for the query-db tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct QueryDbParams {
    /// sql statement to run against database
    pub sql_query: String,
}

/// Execute the query-db tool.
///
/// Runs the statement read-only against the warehouse and returns the
/// result rows. Sanitization, the bytes-billed cap and the 60 second wait
/// are applied by the warehouse adapter.
pub async fn execute(db: &dyn Warehouse, params: &QueryDbParams) -> Result<String, WarehouseError> {
    let rows = db.run_query(&params.sql_query).await?;
    Ok(render_rows(&rows))
}

/// Render result rows as a JSON array of objects, column order preserved.
fn render_rows(rows: &[QueryRow]) -> String {
    Value::Array(rows.iter().cloned().map(Value::Object).collect()).to_string()
}
