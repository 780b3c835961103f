use crate::stmt::Value;

use serde::Deserialize;

/// A field's declared default.
///
/// When deserialized, the exact string `"now"` selects the symbolic
/// current-time default; every other value is taken literally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum DefaultValue {
    /// Evaluated to the current time on each insert.
    Now,

    /// A constant value.
    Literal(Value),
}

impl DefaultValue {
    pub fn literal(value: impl Into<Value>) -> Self {
        DefaultValue::Literal(value.into())
    }
}

impl From<Value> for DefaultValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) if s == "now" => DefaultValue::Now,
            value => DefaultValue::Literal(value),
        }
    }
}
