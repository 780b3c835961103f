mod default;
pub use default::DefaultValue;

mod field;
pub use field::{Field, FieldType, IndexFlag};

mod index;
pub use index::IndexPart;

mod model;
pub use model::Model;

mod rules;
pub use rules::Rules;
