use super::*;

use mortar_core::schema::db::Table;

/// Asks the backend for the `CREATE TABLE` statement of an existing table.
#[derive(Debug, Clone)]
pub struct ShowCreateTable {
    pub name: Name,
}

impl Statement {
    pub fn show_create_table(table: &Table) -> Self {
        ShowCreateTable {
            name: Name::from(&table.name),
        }
        .into()
    }
}

impl From<ShowCreateTable> for Statement {
    fn from(value: ShowCreateTable) -> Self {
        Self::ShowCreateTable(value)
    }
}
