use super::{Column, Index};

/// A normalized table, ready to be serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// The table's columns, in declaration order
    pub columns: Vec<Column>,

    /// Positions in `columns` of the primary key columns, in declaration
    /// order
    pub primary_key: Vec<usize>,

    /// Named indices followed by per-column unique and secondary indices
    pub indices: Vec<Index>,
}

impl Table {
    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.primary_key.iter().map(|index| &self.columns[*index])
    }
}
