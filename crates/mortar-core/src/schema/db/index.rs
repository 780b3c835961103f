use crate::stmt::Direction;

#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    /// Index name, unique within the table
    pub name: String,

    /// Columns included in the index, in order.
    pub columns: Vec<IndexColumn>,

    /// When `true`, indexed entries are unique
    pub unique: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexColumn {
    /// Name of the indexed column
    pub column: String,

    pub direction: Direction,
}

impl Index {
    /// An index over a single column.
    pub fn single(
        name: impl Into<String>,
        column: impl Into<String>,
        direction: Direction,
        unique: bool,
    ) -> Self {
        Self {
            name: name.into(),
            columns: vec![IndexColumn {
                column: column.into(),
                direction,
            }],
            unique,
        }
    }
}
