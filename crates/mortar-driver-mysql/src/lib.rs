mod config;
pub use config::PoolConfig;

mod value;
pub(crate) use value::Value;

use mortar_core::{
    async_trait,
    driver::{Driver, Rows, WriteSummary},
    stmt::{self, Record},
    Error, Result,
};
use mysql_async::{
    prelude::{Queryable, ToValue},
    Conn, Params, Pool, Row,
};
use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

/// MySQL error code for a statement naming a table that does not exist.
pub const ER_NO_SUCH_TABLE: u16 = 1146;

/// Receives pool-level errors.
pub type ErrorSink = Arc<dyn Fn(&Error) + Send + Sync>;

pub struct MySQL {
    config: PoolConfig,
    state: Mutex<State>,
    on_error: ErrorSink,
}

#[derive(Debug)]
enum State {
    Uninitialized,
    Ready(Pool),
    Closed,
}

impl MySQL {
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            state: Mutex::new(State::Uninitialized),
            on_error: Arc::new(|err: &Error| tracing::error!(error = %err, "mysql pool error")),
        }
    }

    pub fn from_url(url: impl AsRef<str>) -> Result<Self> {
        Ok(Self::new(PoolConfig::from_url(url)?))
    }

    /// Replaces the default sink, which logs pool errors through `tracing`.
    pub fn on_error(mut self, sink: impl Fn(&Error) + Send + Sync + 'static) -> Self {
        self.on_error = Arc::new(sink);
        self
    }

    fn pool(&self) -> Result<Pool> {
        match &*self.state.lock().unwrap_or_else(PoisonError::into_inner) {
            State::Ready(pool) => Ok(pool.clone()),
            State::Uninitialized => Err(Error::connection_pool("pool is not initialized")),
            State::Closed => Err(Error::connection_pool("pool is closed")),
        }
    }

    async fn conn(&self) -> Result<Conn> {
        let pool = self.pool()?;

        pool.get_conn().await.map_err(|err| {
            let err = backend_error(err);
            (self.on_error)(&err);
            err
        })
    }

    /// Maps a statement failure. Anything the server did not answer with an
    /// error packet (dropped connection, protocol error) also goes to the
    /// error sink.
    fn statement_error(&self, err: mysql_async::Error) -> Error {
        let reported = !matches!(err, mysql_async::Error::Server(_));
        let err = backend_error(err);

        if reported {
            (self.on_error)(&err);
        }
        err
    }
}

#[async_trait]
impl Driver for MySQL {
    async fn init(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        match &*state {
            State::Uninitialized => {}
            State::Ready(_) => return Err(Error::connection_pool("pool is already initialized")),
            State::Closed => return Err(Error::connection_pool("pool is closed")),
        }

        // `Pool::new` does not connect; the first query does.
        let pool = Pool::new(self.config.opts()?);
        *state = State::Ready(pool);

        tracing::debug!(
            host = %self.config.host,
            port = self.config.port,
            connection_limit = self.config.connection_limit,
            "mysql pool ready"
        );
        Ok(())
    }

    async fn query(&self, sql: &str, params: &[stmt::Value]) -> Result<Rows> {
        let mut conn = self.conn().await?;

        let rows: Vec<Row> = conn
            .exec(sql, positional(params))
            .await
            .map_err(|err| self.statement_error(err))?;

        Ok(rows.into_iter().map(record).collect())
    }

    async fn exec(&self, sql: &str, params: &[stmt::Value]) -> Result<WriteSummary> {
        let mut conn = self.conn().await?;

        conn.exec_drop(sql, positional(params))
            .await
            .map_err(|err| self.statement_error(err))?;

        Ok(WriteSummary {
            affected_rows: conn.affected_rows(),
            changed_rows: changed_rows(&conn.info()),
            insert_id: conn.last_insert_id(),
        })
    }

    async fn close(&self) -> Result<()> {
        let pool = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

            match std::mem::replace(&mut *state, State::Closed) {
                State::Ready(pool) => pool,
                State::Uninitialized => {
                    *state = State::Uninitialized;
                    return Err(Error::connection_pool("pool is not initialized"));
                }
                State::Closed => return Err(Error::connection_pool("pool is already closed")),
            }
        };

        // Waits for checked-out connections to come back before disconnecting.
        pool.disconnect().await.map_err(backend_error)?;

        tracing::debug!("mysql pool closed");
        Ok(())
    }

    fn is_no_such_table(&self, err: &Error) -> bool {
        err.backend_code() == Some(ER_NO_SUCH_TABLE)
    }
}

impl fmt::Debug for MySQL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MySQL")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Every statement goes through the binary protocol so cells come back typed
/// the same way with or without parameters.
fn positional(params: &[stmt::Value]) -> Params {
    if params.is_empty() {
        return Params::Empty;
    }

    Params::Positional(params.iter().map(|param| Value::from(param).to_value()).collect())
}

fn record(mut row: Row) -> Record {
    let columns = row.columns();

    columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let value = row
                .take::<mysql_async::Value, _>(index)
                .unwrap_or(mysql_async::Value::NULL);
            (column.name_str().into_owned(), value::from_mysql(value))
        })
        .collect()
}

/// Keeps the server's error code so callers can tell errors apart.
fn backend_error(err: mysql_async::Error) -> Error {
    let code = match &err {
        mysql_async::Error::Server(server) => Some(server.code),
        _ => None,
    };

    match code {
        Some(code) => Error::driver_with_code(code, err),
        None => Error::driver(err),
    }
}

/// Reads `Changed: N` from the info message MySQL sends after an `UPDATE`,
/// e.g. `Rows matched: 3  Changed: 2  Warnings: 0`.
fn changed_rows(info: &str) -> Option<u64> {
    let (_, rest) = info.split_once("Changed:")?;
    rest.split_whitespace().next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::changed_rows;

    #[test]
    fn changed_rows_from_info() {
        assert_eq!(
            changed_rows("Rows matched: 3  Changed: 2  Warnings: 0"),
            Some(2)
        );
        assert_eq!(changed_rows("Records: 3  Duplicates: 0  Warnings: 0"), None);
        assert_eq!(changed_rows(""), None);
    }
}
