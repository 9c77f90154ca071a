//! Table schema descriptors.

use serde_json::{Map, Value};

/// A single field in a table schema, as reported by the warehouse.
///
/// Carried verbatim: name, type and mode come straight from the table
/// metadata, in the order the warehouse lists them.
#[derive(Debug, Clone, PartialEq)]
pub struct TableField {
    pub name: String,
    pub field_type: String,
    pub mode: Option<String>,
}

impl TableField {
    /// Field descriptor without a mode.
    pub fn new(name: &str, field_type: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
            mode: None,
        }
    }

    /// Field descriptor with an explicit mode (e.g. "NULLABLE", "REQUIRED").
    pub fn with_mode(name: &str, field_type: &str, mode: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
            mode: Some(mode.to_string()),
        }
    }

    /// JSON object form used when rendering a schema as text.
    pub fn to_value(&self) -> Value {
        let mut field = Map::new();
        field.insert("name".to_string(), Value::String(self.name.clone()));
        field.insert("type".to_string(), Value::String(self.field_type.clone()));
        field.insert(
            "mode".to_string(),
            match &self.mode {
                Some(mode) => Value::String(mode.clone()),
                None => Value::Null,
            },
        );
        Value::Object(field)
    }
}
