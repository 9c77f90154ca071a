//! BigQuery connection and the warehouse operations built on it.

use async_trait::async_trait;
use gcp_bigquery_client::Client;
use gcp_bigquery_client::model::field_type::FieldType;
use gcp_bigquery_client::model::query_request::QueryRequest;
use gcp_bigquery_client::model::table_field_schema::TableFieldSchema;
use gcp_bigquery_client::{dataset, table};
use log::debug;
use serde_json::{Map, Value};
use tokio::time::{Duration, timeout};

use crate::errors::WarehouseError;
use crate::query::{MAXIMUM_BYTES_BILLED, QUERY_TIMEOUT_SECS, sanitize_query};
use crate::schema::TableField;

/// One result row: column name to value, in warehouse column order.
pub type QueryRow = Map<String, Value>;

/// The warehouse operations exposed as tools.
///
/// Implemented by [`BigQueryDatabase`] against the live service; tests
/// substitute their own implementation.
#[async_trait]
pub trait Warehouse: Send + Sync {
    /// List all dataset ids visible to the connection's project, in the
    /// order the warehouse reports them.
    async fn list_dataset_ids(&self) -> Result<Vec<String>, WarehouseError>;

    /// List all table ids within a dataset.
    async fn list_table_ids(&self, dataset_id: &str) -> Result<Vec<String>, WarehouseError>;

    /// Fetch the field list of a single table.
    async fn get_table_schema(
        &self,
        dataset_id: &str,
        table_id: &str,
    ) -> Result<Vec<TableField>, WarehouseError>;

    /// Execute a SQL statement read-only and collect its result rows.
    async fn run_query(&self, sql_query: &str) -> Result<Vec<QueryRow>, WarehouseError>;
}

/// A single authenticated BigQuery connection.
///
/// Created once at process start and reused for every request; no operation
/// reconnects.
pub struct BigQueryDatabase {
    client: Client,
    project_id: String,
}

impl BigQueryDatabase {
    /// Connect to BigQuery for the given project.
    ///
    /// Authenticates with the service account key file when one is given,
    /// otherwise with application default credentials.
    pub async fn connect(
        project_id: &str,
        sa_key_file: Option<&str>,
    ) -> Result<Self, WarehouseError> {
        let client = match sa_key_file {
            Some(path) => Client::from_service_account_key_file(path).await?,
            None => Client::from_application_default_credentials().await?,
        };

        debug!("Connected to BigQuery project {}", project_id);

        Ok(Self {
            client,
            project_id: project_id.to_string(),
        })
    }

    /// The project this connection was created for.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

#[async_trait]
impl Warehouse for BigQueryDatabase {
    async fn list_dataset_ids(&self) -> Result<Vec<String>, WarehouseError> {
        let datasets = self
            .client
            .dataset()
            .list(&self.project_id, dataset::ListOptions::default())
            .await?;

        let ids = datasets
            .datasets
            .into_iter()
            .map(|dataset| dataset.dataset_reference.dataset_id)
            .collect();

        Ok(ids)
    }

    async fn list_table_ids(&self, dataset_id: &str) -> Result<Vec<String>, WarehouseError> {
        if dataset_id.is_empty() {
            return Err(WarehouseError::Validation(
                "dataset_id must not be empty".to_string(),
            ));
        }

        let tables = self
            .client
            .table()
            .list(&self.project_id, dataset_id, table::ListOptions::default())
            .await?;

        let table_ids: Vec<String> = tables
            .tables
            .unwrap_or_default()
            .into_iter()
            .map(|table| table.table_reference.table_id)
            .collect();

        debug!("Found {} tables", table_ids.len());

        Ok(table_ids)
    }

    async fn get_table_schema(
        &self,
        dataset_id: &str,
        table_id: &str,
    ) -> Result<Vec<TableField>, WarehouseError> {
        if dataset_id.is_empty() || table_id.is_empty() {
            return Err(WarehouseError::Validation(
                "dataset_id and table_id must not be empty".to_string(),
            ));
        }

        debug!("Fetching schema for {}.{}", dataset_id, table_id);

        let table = self
            .client
            .table()
            .get(&self.project_id, dataset_id, table_id, None)
            .await?;

        let fields = table
            .schema
            .fields
            .unwrap_or_default()
            .iter()
            .map(field_descriptor)
            .collect();

        Ok(fields)
    }

    async fn run_query(&self, sql_query: &str) -> Result<Vec<QueryRow>, WarehouseError> {
        let cleaned_query = sanitize_query(sql_query);

        let mut request = QueryRequest::new(cleaned_query);
        request.maximum_bytes_billed = Some(MAXIMUM_BYTES_BILLED.to_string());
        request.use_legacy_sql = false;

        let job = self.client.job();
        let query = job.query(&self.project_id, request);
        let mut result_set = match timeout(Duration::from_secs(QUERY_TIMEOUT_SECS), query).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(WarehouseError::Timeout {
                    seconds: QUERY_TIMEOUT_SECS,
                });
            }
        };

        let columns = result_set.column_names();
        let mut rows = Vec::with_capacity(result_set.row_count());
        while result_set.next_row() {
            let mut row = QueryRow::new();
            for column in &columns {
                let value = result_set.get_json_value_by_name(column)?.unwrap_or(Value::Null);
                row.insert(column.clone(), value);
            }
            rows.push(row);
        }

        debug!("First 3 rows of result: {:?}", &rows[..rows.len().min(3)]);

        Ok(rows)
    }
}

fn field_descriptor(field: &TableFieldSchema) -> TableField {
    TableField {
        name: field.name.clone(),
        field_type: field_type_name(&field.r#type),
        mode: field.mode.clone(),
    }
}

/// REST name of a field type ("INTEGER", "RECORD", ...).
fn field_type_name(field_type: &FieldType) -> String {
    match serde_json::to_value(field_type) {
        Ok(Value::String(name)) => name,
        _ => format!("{:?}", field_type).to_uppercase(),
    }
}
