//! List datasets tool implementation.

use std::sync::Arc;

use bq_core::{Warehouse, WarehouseError};
use rmcp::model::JsonObject;
use serde_json::Value;

/// Execute the list-dataset-ids tool.
///
/// Returns every dataset id visible to the connection's project, in the
/// order the warehouse reports them.
pub async fn execute(db: &dyn Warehouse) -> Result<String, WarehouseError> {
    let ids = db.list_dataset_ids().await?;
    Ok(super::render_ids(&ids))
}

/// Input schema for the one tool that takes no arguments.
pub fn input_schema() -> Arc<JsonObject> {
    let mut schema = JsonObject::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(JsonObject::new()));
    Arc::new(schema)
}
