mod response;
pub use response::{ExecResult, Rows, WriteSummary};

use crate::{async_trait, stmt::Value, Error, Result};

use std::fmt::Debug;

/// A relational backend reached through a connection pool.
///
/// Implementations own the pool and its lifecycle. Each method resolves
/// exactly once; concurrent calls may run on different pooled connections
/// and complete in any order.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Prepares the pool. Connections are established lazily on first use.
    async fn init(&self) -> Result<()>;

    /// Runs a read statement and returns the rows unmodified.
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Rows>;

    /// Runs a mutating statement and reports what the backend said about it.
    async fn exec(&self, sql: &str, params: &[Value]) -> Result<WriteSummary>;

    /// Drains in-flight work and releases the pool.
    async fn close(&self) -> Result<()>;

    /// True if `err` is the backend telling us a table does not exist.
    fn is_no_such_table(&self, err: &Error) -> bool;
}
