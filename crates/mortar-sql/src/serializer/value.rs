use super::{Formatter, ToSql};

use mortar_core::stmt::Value;

/// A value written inline as a SQL literal, as in a `DEFAULT` clause.
pub(super) struct Literal<'a>(pub(super) &'a Value);

impl ToSql for Literal<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self.0 {
            Value::Null => fmt!(f, "NULL"),
            Value::Bool(true) => fmt!(f, "1"),
            Value::Bool(false) => fmt!(f, "0"),
            Value::I64(v) => fmt!(f, &v.to_string()),
            Value::U64(v) => fmt!(f, &v.to_string()),
            Value::F64(v) => fmt!(f, &v.to_string()),
            Value::String(v) => quoted(v, f),
            Value::Bytes(v) => {
                f.dst.push_str("X'");
                for byte in v {
                    f.dst.push_str(&format!("{byte:02X}"));
                }
                f.dst.push('\'');
            }
        }
    }
}

fn quoted(s: &str, f: &mut Formatter<'_>) {
    f.dst.push('\'');
    for ch in s.chars() {
        match ch {
            '\'' => f.dst.push_str("''"),
            '\\' => f.dst.push_str("\\\\"),
            ch => f.dst.push(ch),
        }
    }
    f.dst.push('\'');
}
