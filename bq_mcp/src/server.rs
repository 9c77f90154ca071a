//! Core MCP server implementation.

use std::sync::Arc;

use log::debug;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt, model::*,
    service::RequestContext, transport::stdio,
};

use bq_core::Warehouse;

use crate::tools;

/// Name the server declares during the initialization handshake.
pub const SERVER_NAME: &str = "bigquery-manager";

/// Error type for MCP server operations.
#[derive(Debug)]
pub enum ServerError {
    /// MCP protocol error
    Mcp(String),
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::Mcp(msg) => write!(f, "MCP error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

/// MCP server for a BigQuery project.
///
/// Exposes the four warehouse operations as MCP tools. Calls are
/// independent request/response pairs; the shared connection handle is the
/// only long-lived state.
#[derive(Clone)]
pub struct BigQueryMcpServer {
    db: Arc<dyn Warehouse>,
}

impl BigQueryMcpServer {
    /// Create a new MCP server around an established warehouse connection.
    pub fn new(db: Arc<dyn Warehouse>) -> Self {
        Self { db }
    }

    /// Serve MCP over stdio (stdin/stdout).
    ///
    /// This method blocks until the connection is closed.
    pub async fn serve_stdio(self) -> Result<(), ServerError> {
        debug!("Starting MCP server on stdio");
        let service = self
            .serve(stdio())
            .await
            .map_err(|e| ServerError::Mcp(format!("Failed to start server: {}", e)))?;
        service
            .waiting()
            .await
            .map_err(|e| ServerError::Mcp(format!("Server error: {}", e)))?;
        Ok(())
    }
}

impl ServerHandler for BigQueryMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "BigQuery MCP server. Use list-dataset-ids and list-table-ids to discover data, \
                 get-table-schema to inspect a table, and query-db to run standard SQL."
                    .into(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        debug!("Listing tools");

        Ok(ListToolsResult {
            tools: tools::catalog(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool call: {}", request.name);

        // Every outcome, including validation and backend failures, comes
        // back as a well-formed result. The host loop never sees a fault.
        Ok(tools::dispatch(self.db.as_ref(), &request.name, request.arguments.as_ref()).await)
    }
}
