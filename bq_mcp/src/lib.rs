//! MCP server for BigQuery.
//!
//! This crate provides an MCP (Model Context Protocol) server that exposes
//! BigQuery dataset discovery, table schemas and read-only SQL queries to
//! AI assistants.

mod server;
pub mod tools;

pub use server::{BigQueryMcpServer, ServerError};
