use super::*;

use mortar_core::schema::db::Table;

/// `DROP TABLE`, issued when a table is rebuilt with a new definition.
#[derive(Debug, Clone)]
pub struct DropTable {
    pub name: Name,
}

impl Statement {
    pub fn drop_table(table: &Table) -> Self {
        DropTable {
            name: Name::from(&table.name),
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
