use super::Value;

use indexmap::IndexMap;

/// A row keyed by column name, in the order the backend returned the columns.
pub type Record = IndexMap<String, Value>;
