use crate::{stmt::Value, Error, Result};

use serde::Deserialize;

/// Validation rules attached to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rules {
    /// Longest accepted string, in characters.
    #[serde(default)]
    pub max_length: Option<u64>,

    /// Shortest accepted string, in characters.
    #[serde(default)]
    pub min_length: Option<u64>,

    /// Inclusive `(min, max)` bounds on string length.
    #[serde(default)]
    pub range_length: Option<(u64, u64)>,
}

impl Rules {
    /// True if any length or range rule was declared.
    pub fn has_length(&self) -> bool {
        self.max_length.is_some() || self.min_length.is_some() || self.range_length.is_some()
    }

    /// Checks a value about to be written to `column`. Only strings are
    /// subject to length rules.
    pub fn check(&self, column: &str, value: &Value) -> Result<()> {
        let Value::String(value) = value else {
            return Ok(());
        };

        let len = value.chars().count();
        let len_u64 = len as u64;

        if let Some((min, max)) = self.range_length {
            if len_u64 < min || len_u64 > max {
                return Err(Error::validation_length(column, len, Some(min), Some(max)));
            }
        }

        if let Some(min) = self.min_length {
            if len_u64 < min {
                return Err(Error::validation_length(column, len, Some(min), self.max_length));
            }
        }

        if let Some(max) = self.max_length {
            if len_u64 > max {
                return Err(Error::validation_length(column, len, self.min_length, Some(max)));
            }
        }

        Ok(())
    }
}
