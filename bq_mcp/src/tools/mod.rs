//! MCP tool implementations for BigQuery.
//!
//! One module per tool: a parameter struct describing the accepted
//! arguments plus an `execute` function calling the warehouse. [`dispatch`]
//! routes by tool name, checks required arguments before any warehouse
//! call, and collapses every outcome to a single text payload.

pub mod get_table_schema;
pub mod list_dataset_ids;
pub mod list_table_ids;
pub mod query_db;

pub use get_table_schema::GetTableSchemaParams;
pub use list_table_ids::ListTableIdsParams;
pub use query_db::QueryDbParams;

use std::sync::Arc;

use bq_core::{Warehouse, WarehouseError};
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use rmcp::schemars;
use serde_json::Value;

/// The four advertised tools, with their argument schemas.
pub fn catalog() -> Vec<Tool> {
    vec![
        Tool::new(
            "list-dataset-ids",
            "List all datasets in a BigQuery project",
            list_dataset_ids::input_schema(),
        ),
        Tool::new(
            "list-table-ids",
            "List all tables in the BigQuery database",
            input_schema::<ListTableIdsParams>(),
        ),
        Tool::new(
            "get-table-schema",
            "Get the schema for a table in a BigQuery dataset",
            input_schema::<GetTableSchemaParams>(),
        ),
        Tool::new(
            "query-db",
            "Run a SQL query against the database",
            input_schema::<QueryDbParams>(),
        ),
    ]
}

/// Route a tool call to its implementation and collapse the outcome to text.
///
/// Success renders the return value as a single text payload; every error,
/// whether validation, backend or timeout, comes back as a text payload of
/// the form `Error: <message>`. Nothing propagates past this boundary.
pub async fn dispatch(
    db: &dyn Warehouse,
    name: &str,
    arguments: Option<&JsonObject>,
) -> CallToolResult {
    match try_dispatch(db, name, arguments).await {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => CallToolResult::error(vec![Content::text(format!("Error: {}", e))]),
    }
}

async fn try_dispatch(
    db: &dyn Warehouse,
    name: &str,
    arguments: Option<&JsonObject>,
) -> Result<String, WarehouseError> {
    match name {
        "list-dataset-ids" => list_dataset_ids::execute(db).await,
        "list-table-ids" => {
            let Some(dataset_id) = required_arg(arguments, "dataset_id") else {
                return Err(missing("Missing dataset_id argument"));
            };

            let params = ListTableIdsParams { dataset_id };
            list_table_ids::execute(db, &params).await
        }
        "get-table-schema" => {
            let dataset_id = required_arg(arguments, "dataset_id");
            let table_id = required_arg(arguments, "table_id");
            let (Some(dataset_id), Some(table_id)) = (dataset_id, table_id) else {
                return Err(missing("Missing dataset_id and/or table_id arguments"));
            };

            let params = GetTableSchemaParams {
                dataset_id,
                table_id,
            };
            get_table_schema::execute(db, &params).await
        }
        "query-db" => {
            let Some(sql_query) = required_arg(arguments, "sql_query") else {
                return Err(missing("Missing sql_query argument"));
            };

            let params = QueryDbParams { sql_query };
            query_db::execute(db, &params).await
        }
        _ => Err(WarehouseError::Validation(format!("Unknown tool: {}", name))),
    }
}

fn missing(message: &str) -> WarehouseError {
    WarehouseError::Validation(message.to_string())
}

/// Extract a required string argument, if present.
fn required_arg(arguments: Option<&JsonObject>, key: &str) -> Option<String> {
    arguments
        .and_then(|args| args.get(key))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Render a list of identifiers as a JSON array.
fn render_ids(ids: &[String]) -> String {
    Value::Array(ids.iter().cloned().map(Value::String).collect()).to_string()
}

/// JSON schema for a tool's parameter struct.
fn input_schema<T: schemars::JsonSchema>() -> Arc<JsonObject> {
    let schema = schemars::schema_for!(T);
    match serde_json::to_value(schema) {
        Ok(Value::Object(schema)) => Arc::new(schema),
        _ => Arc::new(JsonObject::new()),
    }
}
