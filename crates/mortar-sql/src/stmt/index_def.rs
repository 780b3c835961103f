use super::{Direction, Name};

use mortar_core::schema::db::Index;

/// An index clause inside `CREATE TABLE`.
#[derive(Debug, Clone)]
pub struct IndexDef {
    pub name: Name,
    pub columns: Vec<(Name, Direction)>,
    pub unique: bool,
}

impl IndexDef {
    pub(crate) fn from_schema(index: &Index) -> IndexDef {
        IndexDef {
            name: Name::from(&index.name),
            columns: index
                .columns
                .iter()
                .map(|column| (Name::from(&column.column), column.direction))
                .collect(),
            unique: index.unique,
        }
    }
}
