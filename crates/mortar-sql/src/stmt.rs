mod column_def;
pub use column_def::{ColumnDef, Nullability};

mod create_table;
pub use create_table::CreateTable;

mod drop_table;
pub use drop_table::DropTable;

mod index_def;
pub use index_def::IndexDef;

mod insert;
pub use insert::Insert;

mod name;
pub use name::Name;

mod show_create_table;
pub use show_create_table::ShowCreateTable;

pub use mortar_core::stmt::*;

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    DropTable(DropTable),
    Insert(Insert),
    ShowCreateTable(ShowCreateTable),
}
