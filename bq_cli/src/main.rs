//! Entry point for the bq-mcp binary.

mod cli;
mod errors;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use bq_core::BigQueryDatabase;
use bq_mcp::BigQueryMcpServer;

use crate::cli::BqCli;
use crate::errors::CliError;

fn main() -> ExitCode {
    // Logs go to stderr; stdout belongs to the MCP transport.
    env_logger::init();

    let cli = BqCli::parse();

    match serve(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Connect to BigQuery once, then run the stdio serve loop to completion.
fn serve(cli: &BqCli) -> Result<(), CliError> {
    let rt = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;

    rt.block_on(async {
        let db = BigQueryDatabase::connect(&cli.project_id, cli.sa_key.as_deref())
            .await
            .map_err(CliError::Connect)?;

        let server = BigQueryMcpServer::new(Arc::new(db));
        server.serve_stdio().await.map_err(CliError::Serve)
    })
}
