//! List tables tool implementation.

use bq_core::{Warehouse, WarehouseError};
use rmcp::schemars;

/// Parameters for the list-table-ids tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ListTableIdsParams {
    /// dataset_id to specify which tables to return
    pub dataset_id: String,
}

/// Execute the list-table-ids tool.
///
/// Returns the table ids within the given dataset. An unknown dataset
/// surfaces as a backend error from the warehouse, not a local check.
pub async fn execute(
    db: &dyn Warehouse,
    params: &ListTableIdsParams,
) -> Result<String, WarehouseError> {
    let ids = db.list_table_ids(&params.dataset_id).await?;
    Ok(super::render_ids(&ids))
}
