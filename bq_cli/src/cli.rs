//! Command line interface for the BigQuery MCP server.

use clap::Parser;

/// Defines the command line interface with clap.
#[derive(Parser, Debug)]
#[command(name = "bq-mcp")]
#[command(version, about = "Expose BigQuery datasets, schemas and SQL queries as MCP tools.")]
pub struct BqCli {
    /// Google Cloud project whose datasets the server exposes.
    #[arg(long, env = "PROJECT_ID")]
    pub project_id: String,

    /// Path to a service account key file. Application default credentials
    /// are used when not set.
    #[arg(long, env = "BIGQUERY_SA_KEY")]
    pub sa_key: Option<String>,
}
