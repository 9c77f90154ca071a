mod helpers;

use bq_mcp::tools::query_db::{self, QueryDbParams};
use helpers::{MockWarehouse, row};
use serde_json::Value;

#[cfg(test)]
mod tests {
    use super::*;

    fn params(sql_query: &str) -> QueryDbParams {
        QueryDbParams {
            sql_query: sql_query.to_string(),
        }
    }

    #[tokio::test]
    async fn test_query_renders_rows_in_column_order() {
        let mut db = MockWarehouse::healthy();
        db.rows = vec![row(&[
            ("total", Value::from(9.5)),
            ("id", Value::from(1)),
        ])];

        let text = query_db::execute(&db, &params("SELECT total, id FROM sales.orders"))
            .await
            .unwrap();

        // Column order comes from the warehouse, not from any local sort.
        assert_eq!(text, r#"[{"total":9.5,"id":1}]"#);
    }

    #[tokio::test]
    async fn test_query_empty_result_set() {
        let mut db = MockWarehouse::healthy();
        db.rows = Vec::new();

        let text = query_db::execute(&db, &params("SELECT 1 WHERE FALSE"))
            .await
            .unwrap();

        assert_eq!(text, "[]");
    }

    #[tokio::test]
    async fn test_query_null_values_survive() {
        let mut db = MockWarehouse::healthy();
        db.rows = vec![row(&[("id", Value::from(1)), ("total", Value::Null)])];

        let text = query_db::execute(&db, &params("SELECT id, total FROM sales.orders"))
            .await
            .unwrap();

        assert_eq!(text, r#"[{"id":1,"total":null}]"#);
    }

    #[tokio::test]
    async fn test_query_timeout_error_passes_through() {
        let db = MockWarehouse::timing_out();

        let err = query_db::execute(&db, &params("SELECT * FROM sales.orders"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("timed out"));
    }
}
