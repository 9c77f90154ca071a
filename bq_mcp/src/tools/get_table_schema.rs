//! Table schema tool implementation.

use bq_core::{TableField, Warehouse, WarehouseError};
use rmcp::schemars;
use serde_json::Value;

/// Parameters for the get-table-schema tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetTableSchemaParams {
    /// dataset_id of the dataset containing the table
    pub dataset_id: String,
    /// table_id to specify which table schema to return
    pub table_id: String,
}

/// Execute the get-table-schema tool.
///
/// Returns the table's field descriptors in warehouse order.
pub async fn execute(
    db: &dyn Warehouse,
    params: &GetTableSchemaParams,
) -> Result<String, WarehouseError> {
    let fields = db
        .get_table_schema(&params.dataset_id, &params.table_id)
        .await?;

    Ok(render_fields(&fields))
}

/// Render field descriptors as a JSON array of objects.
fn render_fields(fields: &[TableField]) -> String {
    Value::Array(fields.iter().map(TableField::to_value).collect()).to_string()
}
