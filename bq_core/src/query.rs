//! Query sanitization and job limits.

/// Ceiling on bytes a single query job may bill.
pub const MAXIMUM_BYTES_BILLED: i64 = 100_000_000;

/// How long to wait for a query job before giving up.
pub const QUERY_TIMEOUT_SECS: u64 = 60;

/// Collapse escape noise in an incoming SQL string.
///
/// Replaces literal `\n` pairs, then real newlines, then any remaining
/// backslashes with single spaces. The transformation is lossy: a backslash
/// inside a string literal or regex does not survive it.
pub fn sanitize_query(sql_query: &str) -> String {
    sql_query
        .replace("\\n", " ")
        .replace('\n', " ")
        .replace('\\', " ")
}
