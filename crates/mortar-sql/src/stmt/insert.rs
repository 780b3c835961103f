use super::*;

use mortar_core::schema::db::Table;

/// A single-row insert with one positional placeholder per column.
#[derive(Debug, Clone)]
pub struct Insert {
    pub table: Name,
    pub columns: Vec<Name>,
}

impl Statement {
    pub fn insert<'a>(table: &Table, columns: impl IntoIterator<Item = &'a str>) -> Self {
        Insert {
            table: Name::from(&table.name),
            columns: columns.into_iter().map(Name::from).collect(),
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
