use super::Type;
use crate::{
    schema::app::{self, DefaultValue, FieldType, Rules},
    stmt::{Direction, Value},
    Error, Result,
};

/// A normalized column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The column type, from the application's point of view.
    pub ty: FieldType,

    /// The database storage type of the column.
    pub storage_ty: Type,

    /// True if inserts must supply a value (or the column has a default).
    pub required: bool,

    /// Whether or not the column is declared `NULL` in the table.
    pub nullable: bool,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,

    /// True if the backend assigns the value on insert.
    pub auto_increment: bool,

    /// Value used when an insert omits the column.
    pub default: Option<ColumnDefault>,

    /// Direction of the column's dedicated unique index, if any.
    pub unique: Option<Direction>,

    /// Direction of the column's dedicated secondary index, if any.
    pub index: Option<Direction>,

    pub rules: Rules,
}

/// A resolved column default.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnDefault {
    /// A constant, emitted as a `DEFAULT` clause.
    Value(Value),

    /// The current time, filled in by the write path on every insert and
    /// never emitted in DDL.
    Now,
}

impl ColumnDefault {
    /// Produces the value to write. `Now` is evaluated at call time as
    /// milliseconds since the Unix epoch.
    pub fn resolve(&self) -> Value {
        match self {
            ColumnDefault::Value(value) => value.clone(),
            ColumnDefault::Now => Value::I64(chrono::Utc::now().timestamp_millis()),
        }
    }
}

impl Column {
    /// Checks a value about to be written to this column.
    pub fn check(&self, value: &Value) -> Result<()> {
        if value.is_null() {
            if self.required {
                return Err(Error::validation(&self.name, "value is required"));
            }
            return Ok(());
        }

        self.rules.check(&self.name, value)
    }

    /// Renders this column back into a declaration that normalizes to an
    /// equal column.
    pub fn to_field(&self) -> app::Field {
        app::Field {
            name: self.name.clone(),
            ty: Some(self.ty),
            db_type: Some(self.storage_ty.to_string()),
            require: Some(self.required),
            is_primary_key: self.primary_key,
            auto_increment: self.auto_increment,
            default_value: self.default.as_ref().map(|default| match default {
                ColumnDefault::Now => DefaultValue::Now,
                ColumnDefault::Value(value) => DefaultValue::Literal(value.clone()),
            }),
            unique: self.unique.into(),
            index: self.index.into(),
            rules: self.rules.clone(),
        }
    }
}
