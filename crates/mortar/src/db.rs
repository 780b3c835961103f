mod builder;
pub use builder::Builder;

use crate::{Comparison, Ensured};

use mortar_core::{
    driver::{Driver, ExecResult, Rows},
    schema::{app, db},
    stmt::{Record, Value},
    Error, Result,
};
use mortar_sql::{Serializer, Statement};

use std::{fmt, sync::Arc};

type Comparator = Arc<dyn Fn(&str, &str) -> Comparison + Send + Sync>;

/// Column of the `SHOW CREATE TABLE` result holding the definition.
const CREATE_TABLE_COLUMN: &str = "Create Table";

struct Shared {
    driver: Box<dyn Driver>,
    serializer: Serializer,
    debug: bool,
    compare: Comparator,
}

/// A database handle. Clones share the same driver and pool.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// A MySQL handle whose debug mode follows `config.debug`.
    #[cfg(feature = "mysql")]
    pub fn mysql(config: crate::driver::PoolConfig) -> Db {
        let debug = config.debug;
        Db::builder().debug(debug).mysql(config)
    }

    pub async fn init(&self) -> Result<()> {
        self.shared.driver.init().await
    }

    /// Waits for in-flight statements and releases the pool.
    pub async fn close(&self) -> Result<()> {
        self.shared.driver.close().await
    }

    /// Runs a read statement. Backend errors are returned unchanged.
    pub async fn query(&self, sql: &str, params: &[Value]) -> Result<Rows> {
        tracing::debug!(sql, ?params, "query");
        self.shared.driver.query(sql, params).await
    }

    /// Runs a mutating statement. The backend's changed-row count is
    /// preferred over its affected-row count when it reports both.
    pub async fn exec(&self, sql: &str, params: &[Value]) -> Result<ExecResult> {
        tracing::debug!(sql, ?params, "exec");
        let summary = self.shared.driver.exec(sql, params).await?;
        Ok(summary.into())
    }

    /// Normalizes `model` and makes sure its table exists.
    pub async fn create_table(&self, model: &app::Model) -> Result<Ensured> {
        let table = model.normalize()?;
        self.ensure_table(&table).await
    }

    /// Runs [`Db::create_table`] for each model in order, stopping at the
    /// first failure.
    pub async fn create_tables<'a>(
        &self,
        models: impl IntoIterator<Item = &'a app::Model>,
    ) -> Result<()> {
        for model in models {
            self.create_table(model).await?;
        }
        Ok(())
    }

    /// Creates `table` if it is missing.
    ///
    /// An existing table is compared against the compiled definition. Only
    /// a [`Comparison::Different`] result in debug mode changes anything:
    /// the table is dropped and created again. This is not atomic; a
    /// concurrent creator may cause a duplicate-table error, which is
    /// returned.
    pub async fn ensure_table(&self, table: &db::Table) -> Result<Ensured> {
        let create = self.serialize(&Statement::create_table(table));
        let show = self.serialize(&Statement::show_create_table(table));

        let rows = match self.query(&show, &[]).await {
            Ok(rows) => rows,
            Err(err) if self.shared.driver.is_no_such_table(&err) => {
                tracing::info!(table = %table.name, "creating table");
                self.exec(&create, &[]).await?;
                return Ok(Ensured::Created);
            }
            Err(err) => return Err(err),
        };

        let existing = rows
            .first()
            .and_then(|row| row.get(CREATE_TABLE_COLUMN))
            .and_then(Value::as_str)
            .unwrap_or_default();

        match (self.shared.compare)(existing, &create) {
            Comparison::Different if self.shared.debug => {
                tracing::warn!(table = %table.name, "table definition changed; recreating");
                let drop = self.serialize(&Statement::drop_table(table));
                self.exec(&drop, &[]).await?;
                self.exec(&create, &[]).await?;
                Ok(Ensured::Rebuilt)
            }
            Comparison::Different => {
                tracing::warn!(table = %table.name, "table definition differs; keeping existing table");
                Ok(Ensured::Existing(Comparison::Different))
            }
            Comparison::Unverified => {
                tracing::debug!(table = %table.name, "existing table definition not verified");
                Ok(Ensured::Existing(Comparison::Unverified))
            }
            Comparison::Same => Ok(Ensured::Existing(Comparison::Same)),
        }
    }

    /// Inserts one row into `table`.
    ///
    /// Missing columns take their default; a `now` default is evaluated
    /// here, as milliseconds since the Unix epoch. Missing optional columns
    /// without a default are left to the database. Every written value is
    /// checked against its column's rules first.
    pub async fn insert(&self, table: &db::Table, mut record: Record) -> Result<ExecResult> {
        let mut columns = Vec::with_capacity(table.columns.len());
        let mut params = Vec::with_capacity(table.columns.len());

        for column in &table.columns {
            let value = match record.shift_remove(&column.name) {
                Some(value) => value,
                None => match &column.default {
                    Some(default) => default.resolve(),
                    None if !column.required => continue,
                    None => Value::Null,
                },
            };

            column.check(&value)?;

            columns.push(column.name.as_str());
            params.push(value);
        }

        if let Some(name) = record.keys().next() {
            return Err(Error::validation(
                name,
                format!("no such column in table `{}`", table.name),
            ));
        }

        let sql = self.serialize(&Statement::insert(table, columns));
        self.exec(&sql, &params).await
    }

    fn serialize(&self, stmt: &Statement) -> String {
        self.shared.serializer.serialize(stmt)
    }
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db")
            .field("driver", &self.shared.driver)
            .field("debug", &self.shared.debug)
            .finish_non_exhaustive()
    }
}
