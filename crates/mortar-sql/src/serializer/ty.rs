use super::{Formatter, ToSql};

use mortar_core::schema::db::Type;

impl ToSql for &Type {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            // MySQL stores booleans as a single byte
            Type::Boolean => fmt!(f, "TINYINT"),
            // Timestamps are written as epoch milliseconds
            Type::Timestamp => fmt!(f, "BIGINT UNSIGNED"),
            ty => fmt!(f, &ty.to_string()),
        }
    }
}
