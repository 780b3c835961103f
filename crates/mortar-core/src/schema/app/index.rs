use crate::stmt::Direction;

use indexmap::IndexMap;
use serde::Deserialize;

/// One entry in a named index declaration.
///
/// Either a bare field name, indexed ascending, or a single-entry mapping
/// from field name to direction, e.g. `{"created": "DESC"}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IndexPart {
    Field(String),
    Directed(IndexMap<String, Direction>),
}

impl IndexPart {
    pub fn asc(field: impl Into<String>) -> Self {
        IndexPart::Field(field.into())
    }

    pub fn desc(field: impl Into<String>) -> Self {
        IndexPart::directed(field, Direction::Desc)
    }

    pub fn directed(field: impl Into<String>, direction: Direction) -> Self {
        IndexPart::Directed(IndexMap::from([(field.into(), direction)]))
    }

    /// The `(field, direction)` pairs this part contributes. Mappings with
    /// more than one entry contribute each entry in declaration order.
    pub fn columns(&self) -> Vec<(&str, Direction)> {
        match self {
            IndexPart::Field(name) => vec![(name.as_str(), Direction::Asc)],
            IndexPart::Directed(map) => map
                .iter()
                .map(|(name, direction)| (name.as_str(), *direction))
                .collect(),
        }
    }
}
