use super::{Comma, Formatter, ToSql};

use crate::stmt::{self, Direction, IndexDef, Name};

/// Column definitions followed by the primary key and index clauses, one per
/// line.
struct ColumnsWithConstraints<'a>(&'a stmt::CreateTable);

impl ToSql for ColumnsWithConstraints<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "";

        for column in &self.0.columns {
            fmt!(f, s "\n    " column);
            s = ",";
        }

        if !self.0.primary_key.is_empty() {
            let pk = Comma(&self.0.primary_key);
            fmt!(f, s "\n    PRIMARY KEY (" pk ")");
            s = ",";
        }

        for index in &self.0.indices {
            fmt!(f, s "\n    " index);
            s = ",";
        }

        fmt!(f, "\n");
    }
}

/// A `column direction` pair inside an index clause.
struct IndexColumn<'a>(&'a Name, Direction);

impl ToSql for IndexColumn<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0 " " self.1.as_str());
    }
}

impl ToSql for &IndexDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let unique = if self.unique { "UNIQUE " } else { "" };
        let columns = Comma(
            self.columns
                .iter()
                .map(|(name, direction)| IndexColumn(name, *direction)),
        );

        let name = &self.name;

        fmt!(f, unique "INDEX " name " (" columns ")");
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = &self.name;
        let columns = ColumnsWithConstraints(self);

        fmt!(f, "CREATE TABLE " name " (" columns ")");
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = &self.name;
        fmt!(f, "DROP TABLE " name);
    }
}

impl ToSql for &stmt::ShowCreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = &self.name;
        fmt!(f, "SHOW CREATE TABLE " name);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;
        let columns = Comma(&self.columns);
        let placeholders = Comma(self.columns.iter().map(|_| "?"));

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" placeholders ")");
    }
}

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
            stmt::Statement::DropTable(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::ShowCreateTable(stmt) => stmt.to_sql(f),
        }
    }
}
