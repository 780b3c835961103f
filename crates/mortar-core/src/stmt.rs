mod direction;
pub use direction::Direction;

mod record;
pub use record::Record;

mod value;
pub use value::Value;
