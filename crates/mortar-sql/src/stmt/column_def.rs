use super::Name;

use mortar_core::{
    schema::db::{self, Column, ColumnDefault},
    stmt::Value,
};

#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: Name,
    pub ty: db::Type,
    pub nullability: Nullability,

    /// Literal `DEFAULT` clause
    pub default: Option<Value>,

    pub auto_increment: bool,
}

/// The nullability clause written after the column type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Nullability {
    NotNull,
    Null,

    /// No clause at all. Used for columns whose default is filled in at
    /// write time.
    Unspecified,
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &Column) -> ColumnDef {
        let (nullability, default) = match &column.default {
            Some(ColumnDefault::Now) => (Nullability::Unspecified, None),
            Some(ColumnDefault::Value(value)) => (Nullability::of(column), Some(value.clone())),
            None => (Nullability::of(column), None),
        };

        ColumnDef {
            name: Name::from(&column.name),
            ty: column.storage_ty.clone(),
            nullability,
            default,
            auto_increment: column.auto_increment,
        }
    }
}

impl Nullability {
    fn of(column: &Column) -> Self {
        if column.nullable {
            Nullability::Null
        } else {
            Nullability::NotNull
        }
    }
}
