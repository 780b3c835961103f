use mortar_core::stmt::Value as CoreValue;
use mysql_async::prelude::ToValue;

/// Parameter wrapper handing core values to `mysql_async`.
#[derive(Debug)]
pub struct Value<'a>(&'a CoreValue);

impl<'a> From<&'a CoreValue> for Value<'a> {
    fn from(value: &'a CoreValue) -> Self {
        Self(value)
    }
}

impl ToValue for Value<'_> {
    fn to_value(&self) -> mysql_async::Value {
        match self.0 {
            CoreValue::Null => mysql_async::Value::NULL,
            CoreValue::Bool(value) => value.to_value(),
            CoreValue::I64(value) => value.to_value(),
            CoreValue::U64(value) => value.to_value(),
            CoreValue::F64(value) => value.to_value(),
            CoreValue::String(value) => value.to_value(),
            CoreValue::Bytes(value) => value.to_value(),
        }
    }
}

/// Converts a column value read from the server.
///
/// The text protocol returns everything as bytes; valid UTF-8 becomes a
/// string. Dates and times are rendered in MySQL's literal format.
pub(crate) fn from_mysql(value: mysql_async::Value) -> CoreValue {
    use mysql_async::Value::*;

    match value {
        NULL => CoreValue::Null,
        Bytes(bytes) => match String::from_utf8(bytes) {
            Ok(s) => CoreValue::String(s),
            Err(err) => CoreValue::Bytes(err.into_bytes()),
        },
        Int(v) => CoreValue::I64(v),
        UInt(v) => CoreValue::U64(v),
        Float(v) => CoreValue::F64(v.into()),
        Double(v) => CoreValue::F64(v),
        value @ (Date(..) | Time(..)) => {
            CoreValue::String(value.as_sql(true).trim_matches('\'').to_string())
        }
    }
}
