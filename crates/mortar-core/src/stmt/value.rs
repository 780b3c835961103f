use crate::schema::app::FieldType;

use serde::Deserialize;

/// A scalar value exchanged with the backend: query parameters, row cells and
/// column defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL `NULL`
    Null,

    /// A boolean value
    Bool(bool),

    /// A signed 64-bit integer
    I64(i64),

    /// An unsigned 64-bit integer
    U64(u64),

    /// A double-precision float
    F64(f64),

    /// A UTF-8 string
    String(String),

    /// Raw bytes that are not valid UTF-8
    #[serde(skip_deserializing)]
    Bytes(Vec<u8>),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    /// The semantic field type this value belongs to. `NULL` and raw bytes
    /// belong to none.
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            Value::Bool(_) => Some(FieldType::Boolean),
            Value::I64(_) | Value::U64(_) | Value::F64(_) => Some(FieldType::Number),
            Value::String(_) => Some(FieldType::String),
            Value::Null | Value::Bytes(_) => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I64(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::U64(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::U64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}
