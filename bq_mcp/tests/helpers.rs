//! Shared test helpers for bq_mcp tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bq_core::{QueryRow, TableField, Warehouse, WarehouseError};
use rmcp::model::{CallToolResult, RawContent};
use serde_json::Value;

/// Extract the text content from a CallToolResult.
pub fn get_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "Expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(text_content) => text_content.text.clone(),
        _ => panic!("Expected text content"),
    }
}

/// Check if the result is a success.
pub fn is_success(result: &CallToolResult) -> bool {
    result.is_error == Some(false)
}

/// Check if the result is an error.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}

/// What the mock warehouse does when any operation is called.
pub enum MockBehavior {
    /// Answer from the canned data below.
    Healthy,
    /// Fail with a backend error carrying this message.
    Backend(String),
    /// Fail as if the query wait elapsed.
    Timeout,
}

/// In-memory warehouse that counts how often it was contacted.
pub struct MockWarehouse {
    pub behavior: MockBehavior,
    pub datasets: Vec<String>,
    pub tables: Vec<String>,
    pub fields: Vec<TableField>,
    pub rows: Vec<QueryRow>,
    calls: AtomicUsize,
}

impl MockWarehouse {
    /// A healthy backend with a small fixed catalog.
    pub fn healthy() -> Self {
        Self {
            behavior: MockBehavior::Healthy,
            datasets: vec!["sales".to_string(), "marketing".to_string()],
            tables: vec!["orders".to_string(), "customers".to_string()],
            fields: vec![
                TableField::with_mode("id", "INTEGER", "REQUIRED"),
                TableField::with_mode("total", "FLOAT", "NULLABLE"),
            ],
            rows: vec![
                row(&[("id", Value::from(1)), ("total", Value::from(9.5))]),
                row(&[("id", Value::from(2)), ("total", Value::from(12.0))]),
            ],
            calls: AtomicUsize::new(0),
        }
    }

    /// A backend where every operation fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            behavior: MockBehavior::Backend(message.to_string()),
            ..Self::healthy()
        }
    }

    /// A backend where every operation times out.
    pub fn timing_out() -> Self {
        Self {
            behavior: MockBehavior::Timeout,
            ..Self::healthy()
        }
    }

    /// How many times any operation was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<(), WarehouseError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Healthy => Ok(()),
            MockBehavior::Backend(message) => Err(WarehouseError::Backend(message.clone())),
            MockBehavior::Timeout => Err(WarehouseError::Timeout { seconds: 60 }),
        }
    }
}

#[async_trait]
impl Warehouse for MockWarehouse {
    async fn list_dataset_ids(&self) -> Result<Vec<String>, WarehouseError> {
        self.record()?;
        Ok(self.datasets.clone())
    }

    async fn list_table_ids(&self, _dataset_id: &str) -> Result<Vec<String>, WarehouseError> {
        self.record()?;
        Ok(self.tables.clone())
    }

    async fn get_table_schema(
        &self,
        _dataset_id: &str,
        _table_id: &str,
    ) -> Result<Vec<TableField>, WarehouseError> {
        self.record()?;
        Ok(self.fields.clone())
    }

    async fn run_query(&self, _sql_query: &str) -> Result<Vec<QueryRow>, WarehouseError> {
        self.record()?;
        Ok(self.rows.clone())
    }
}

/// Build a result row from column/value pairs, preserving column order.
pub fn row(columns: &[(&str, Value)]) -> QueryRow {
    let mut row = QueryRow::new();
    for (name, value) in columns {
        row.insert((*name).to_string(), value.clone());
    }
    row
}

/// Build a JSON arguments object from string key/value pairs.
pub fn args(pairs: &[(&str, &str)]) -> rmcp::model::JsonObject {
    let mut arguments = rmcp::model::JsonObject::new();
    for (key, value) in pairs {
        arguments.insert((*key).to_string(), Value::String((*value).to_string()));
    }
    arguments
}
