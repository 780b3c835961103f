mod column;
pub use column::{Column, ColumnDefault};

mod index;
pub use index::{Index, IndexColumn};

mod table;
pub use table::Table;

mod ty;
pub use ty::{IntegerSize, TextSize, Type};
