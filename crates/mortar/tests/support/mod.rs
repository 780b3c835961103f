#![allow(dead_code)]

use mortar::{
    async_trait,
    driver::{Driver, Rows, WriteSummary},
    stmt::{Record, Value},
    Error, Result,
};
use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex},
};

pub const ER_NO_SUCH_TABLE: u16 = 1146;
pub const ER_TABLEACCESS_DENIED: u16 = 1142;

/// An in-memory driver that records every statement it receives.
///
/// Tables come into existence on `CREATE TABLE` and disappear on
/// `DROP TABLE`. `SHOW CREATE TABLE` on an unknown table fails with MySQL's
/// missing-table code.
#[derive(Debug, Clone, Default)]
pub struct RecordingDriver {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    log: Vec<Logged>,
    tables: HashMap<String, String>,
    summary: WriteSummary,
    fail_with: Option<u16>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Logged {
    pub sql: String,
    pub params: Vec<Value>,
}

#[derive(Debug)]
struct BackendError(u16);

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "backend error {}", self.0)
    }
}

impl std::error::Error for BackendError {}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretends `name` already exists with the given stored definition.
    pub fn with_table(self, name: &str, definition: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .tables
            .insert(name.to_string(), definition.to_string());
        self
    }

    /// Every statement from now on fails with `code`.
    pub fn fail_with(&self, code: u16) {
        self.state.lock().unwrap().fail_with = Some(code);
    }

    /// The summary returned by every `exec`.
    pub fn respond_with(&self, summary: WriteSummary) {
        self.state.lock().unwrap().summary = summary;
    }

    pub fn log(&self) -> Vec<Logged> {
        self.state.lock().unwrap().log.clone()
    }

    pub fn statements(&self) -> Vec<String> {
        self.log().into_iter().map(|logged| logged.sql).collect()
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.state.lock().unwrap().tables.contains_key(name)
    }

    fn record(&self, sql: &str, params: &[Value]) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.log.push(Logged {
            sql: sql.to_string(),
            params: params.to_vec(),
        });

        match state.fail_with {
            Some(code) => Err(Error::driver_with_code(code, BackendError(code))),
            None => Ok(()),
        }
    }
}

/// The backtick-quoted name following `prefix`.
fn table_name<'a>(sql: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = sql.strip_prefix(prefix)?.strip_prefix('`')?;
    rest.split('`').next()
}

#[async_trait]
impl Driver for RecordingDriver {
    async fn init(&self) -> Result<()> {
        Ok(())
    }

    async fn query(&self, sql: &str, params: &[Value]) -> Result<Rows> {
        self.record(sql, params)?;

        let Some(name) = table_name(sql, "SHOW CREATE TABLE ") else {
            return Ok(vec![]);
        };

        let state = self.state.lock().unwrap();
        match state.tables.get(name) {
            Some(definition) => {
                let mut row = Record::new();
                row.insert("Table".into(), Value::from(name));
                row.insert("Create Table".into(), Value::from(definition.as_str()));
                Ok(vec![row])
            }
            None => Err(Error::driver_with_code(
                ER_NO_SUCH_TABLE,
                BackendError(ER_NO_SUCH_TABLE),
            )),
        }
    }

    async fn exec(&self, sql: &str, params: &[Value]) -> Result<WriteSummary> {
        self.record(sql, params)?;

        let mut state = self.state.lock().unwrap();
        if let Some(name) = table_name(sql, "CREATE TABLE ") {
            let definition = sql.strip_suffix(';').unwrap_or(sql);
            state.tables.insert(name.to_string(), definition.to_string());
        } else if let Some(name) = table_name(sql, "DROP TABLE ") {
            state.tables.remove(name);
        }

        Ok(state.summary)
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }

    fn is_no_such_table(&self, err: &Error) -> bool {
        err.backend_code() == Some(ER_NO_SUCH_TABLE)
    }
}
