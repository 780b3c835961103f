use super::{Field, IndexPart};
use crate::{
    schema::db::{Index, IndexColumn, Table},
    Result,
};

use indexmap::IndexMap;
use serde::Deserialize;

/// A table as declared by the application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Model {
    /// Table name.
    pub table: String,

    /// Fields in column order.
    pub fields: Vec<Field>,

    /// Named indices, in declaration order. Field names are not checked
    /// against `fields`.
    #[serde(default)]
    pub indices: IndexMap<String, Vec<IndexPart>>,
}

impl Model {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn index(
        mut self,
        name: impl Into<String>,
        parts: impl IntoIterator<Item = IndexPart>,
    ) -> Self {
        self.indices
            .insert(name.into(), parts.into_iter().collect());
        self
    }

    /// Normalizes every field and assembles the table: columns in field
    /// order, primary key in field order, named indices followed by the
    /// per-field unique and secondary indices.
    pub fn normalize(&self) -> Result<Table> {
        let columns = self
            .fields
            .iter()
            .map(Field::normalize)
            .collect::<Result<Vec<_>>>()?;

        let primary_key = columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column.primary_key)
            .map(|(index, _)| index)
            .collect();

        let mut indices: Vec<Index> = self
            .indices
            .iter()
            .map(|(name, parts)| Index {
                name: name.clone(),
                columns: parts
                    .iter()
                    .flat_map(IndexPart::columns)
                    .map(|(column, direction)| IndexColumn {
                        column: column.to_string(),
                        direction,
                    })
                    .collect(),
                unique: false,
            })
            .collect();

        for column in &columns {
            if let Some(direction) = column.unique {
                indices.push(Index::single(
                    format!("{}_UNIQUE", column.name),
                    &column.name,
                    direction,
                    true,
                ));
            }

            if let Some(direction) = column.index {
                indices.push(Index::single(
                    format!("{}_INDEX", column.name),
                    &column.name,
                    direction,
                    false,
                ));
            }
        }

        Ok(Table {
            name: self.table.clone(),
            columns,
            primary_key,
            indices,
        })
    }
}
