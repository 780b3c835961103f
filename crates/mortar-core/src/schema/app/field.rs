use super::{DefaultValue, Rules};
use crate::{
    schema::db::{Column, ColumnDefault, Type},
    stmt::{Direction, Value},
    Error, Result,
};

use serde::Deserialize;

/// A field as declared by the application, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Column name, unique within the model.
    pub name: String,

    /// Application-level type. Derived from `db_type` when both are present.
    #[serde(default, rename = "type")]
    pub ty: Option<FieldType>,

    /// Backend column type, e.g. `varchar(64)`. Case-insensitive.
    #[serde(default)]
    pub db_type: Option<String>,

    /// Whether a value must be supplied on insert. Defaults to `true`.
    #[serde(default)]
    pub require: Option<bool>,

    #[serde(default)]
    pub is_primary_key: bool,

    #[serde(default)]
    pub auto_increment: bool,

    #[serde(default)]
    pub default_value: Option<DefaultValue>,

    /// Requests a dedicated unique index named `<name>_UNIQUE`.
    #[serde(default)]
    pub unique: IndexFlag,

    /// Requests a dedicated secondary index named `<name>_INDEX`.
    #[serde(default)]
    pub index: IndexFlag,

    #[serde(default)]
    pub rules: Rules,
}

/// Application-level semantic type of a field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
}

/// A per-field index request: `false`/absent, `true` (ascending), or an
/// explicit direction.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "IndexFlagRepr")]
pub enum IndexFlag {
    #[default]
    Off,
    On(Direction),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IndexFlagRepr {
    Bool(bool),
    Direction(Direction),
}

impl From<IndexFlagRepr> for IndexFlag {
    fn from(value: IndexFlagRepr) -> Self {
        match value {
            IndexFlagRepr::Bool(true) => IndexFlag::On(Direction::Asc),
            IndexFlagRepr::Bool(false) => IndexFlag::Off,
            IndexFlagRepr::Direction(direction) => IndexFlag::On(direction),
        }
    }
}

impl IndexFlag {
    pub fn direction(self) -> Option<Direction> {
        match self {
            IndexFlag::Off => None,
            IndexFlag::On(direction) => Some(direction),
        }
    }
}

impl From<Option<Direction>> for IndexFlag {
    fn from(value: Option<Direction>) -> Self {
        value.map_or(IndexFlag::Off, IndexFlag::On)
    }
}

impl FieldType {
    /// Column type used when a field declares no `db_type`.
    pub fn default_db_type(self) -> &'static str {
        match self {
            FieldType::String => "STRING",
            FieldType::Number => "INT",
            FieldType::Boolean => "BOOLEAN",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
        }
    }
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn ty(mut self, ty: FieldType) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn db_type(mut self, db_type: impl Into<String>) -> Self {
        self.db_type = Some(db_type.into());
        self
    }

    pub fn require(mut self, require: bool) -> Self {
        self.require = Some(require);
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn default_value(mut self, default: DefaultValue) -> Self {
        self.default_value = Some(default);
        self
    }

    pub fn unique(mut self, direction: Direction) -> Self {
        self.unique = IndexFlag::On(direction);
        self
    }

    pub fn index(mut self, direction: Direction) -> Self {
        self.index = IndexFlag::On(direction);
        self
    }

    pub fn rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Resolves this declaration into a canonical column.
    ///
    /// The declaration is left untouched. Normalizing the result of
    /// [`Column::to_field`] yields an equal column.
    pub fn normalize(&self) -> Result<Column> {
        let declared = match (&self.db_type, self.ty) {
            (Some(db_type), _) => db_type.trim().to_uppercase(),
            (None, Some(ty)) => ty.default_db_type().to_string(),
            (None, None) => return Err(Error::unsupported_type(&self.name, "")),
        };

        let storage_ty =
            Type::parse(&declared).ok_or_else(|| Error::unsupported_type(&self.name, &declared))?;
        let ty = storage_ty.field_type();

        let rules = match storage_ty.length() {
            Some(max_length) if !self.rules.has_length() => Rules {
                max_length: Some(max_length),
                ..self.rules.clone()
            },
            _ => self.rules.clone(),
        };

        let required = if self.is_primary_key && !self.auto_increment {
            true
        } else if self.auto_increment {
            false
        } else {
            self.require.unwrap_or(true)
        };

        let default = match &self.default_value {
            None => None,
            Some(DefaultValue::Now) => {
                if !storage_ty.is_timestamp() {
                    return Err(Error::invalid_default(
                        &self.name,
                        format!("`now` is only valid on TIMESTAMP columns, not {storage_ty}"),
                    ));
                }
                Some(ColumnDefault::Now)
            }
            Some(DefaultValue::Literal(value)) => {
                self.check_literal_default(value, ty, required)?;
                Some(ColumnDefault::Value(value.clone()))
            }
        };

        Ok(Column {
            name: self.name.clone(),
            ty,
            storage_ty,
            required,
            nullable: !(required || self.is_primary_key),
            primary_key: self.is_primary_key,
            auto_increment: self.auto_increment,
            default,
            unique: self.unique.direction(),
            index: self.index.direction(),
            rules,
        })
    }

    fn check_literal_default(&self, value: &Value, ty: FieldType, required: bool) -> Result<()> {
        match value.field_type() {
            Some(value_ty) if value_ty == ty => Ok(()),
            Some(value_ty) => Err(Error::invalid_default(
                &self.name,
                format!(
                    "{} default on a {} column",
                    value_ty.as_str(),
                    ty.as_str()
                ),
            )),
            None if value.is_null() && !required => Ok(()),
            None if value.is_null() => Err(Error::invalid_default(
                &self.name,
                "NULL default on a required column",
            )),
            None => Err(Error::invalid_default(
                &self.name,
                format!("binary default on a {} column", ty.as_str()),
            )),
        }
    }
}
