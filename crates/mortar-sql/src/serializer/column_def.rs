use super::{value::Literal, Ident, ToSql};

use crate::stmt::{ColumnDef, Nullability};

impl ToSql for &ColumnDef {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = Ident(&self.name.0);
        let ty = &self.ty;

        fmt!(f, name " " ty);

        match self.nullability {
            Nullability::NotNull => fmt!(f, " NOT NULL"),
            Nullability::Null => fmt!(f, " NULL"),
            Nullability::Unspecified => {}
        }

        if let Some(default) = &self.default {
            fmt!(f, " DEFAULT " Literal(default));
        }

        if self.auto_increment {
            fmt!(f, " AUTO_INCREMENT");
        }
    }
}
