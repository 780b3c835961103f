//! Comparing an existing table definition with a freshly compiled one.

/// Outcome of comparing the definition reported by `SHOW CREATE TABLE` with
/// the compiled `CREATE TABLE` statement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// The definitions match.
    Same,

    /// The definitions disagree. In debug mode the table is rebuilt.
    Different,

    /// The comparator cannot tell. The existing table is kept.
    Unverified,
}

/// What [`Db::create_table`](crate::Db::create_table) did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ensured {
    /// The table did not exist and was created.
    Created,

    /// The table existed and was left as is.
    Existing(Comparison),

    /// The table existed with a different definition and was dropped and
    /// created again.
    Rebuilt,
}

/// Comparator used when none is configured.
///
/// Table options after the closing parenthesis (`ENGINE=InnoDB`,
/// `DEFAULT CHARSET=...`) and a trailing `;` are ignored. The column and index
/// list is compared byte for byte. MySQL rewrites that list when it stores a
/// table (lowercase types, two-space indent, `KEY` for `INDEX`), so against a
/// live server this usually reports `Unverified`. It never reports
/// `Different`; plug in a real comparator with
/// [`Builder::compare_with`](crate::db::Builder::compare_with).
pub fn compare_definitions(existing: &str, compiled: &str) -> Comparison {
    if table_body(existing) == table_body(compiled) {
        Comparison::Same
    } else {
        Comparison::Unverified
    }
}

/// `CREATE TABLE ... ( ... )` without table options.
fn table_body(definition: &str) -> &str {
    let definition = definition.trim();
    let definition = definition.strip_suffix(';').unwrap_or(definition);

    match definition.rfind(')') {
        Some(end) => &definition[..=end],
        None => definition,
    }
}
