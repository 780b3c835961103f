use crate::stmt::Record;

/// Rows returned by a read statement, in backend order.
pub type Rows = Vec<Record>;

/// What the backend reported after a mutating statement, before
/// normalization.
///
/// Backends disagree on how they count rows. MySQL reports both the rows an
/// `UPDATE` matched and, in its info message, the rows it actually changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    /// Affected row count from the backend's OK response.
    pub affected_rows: u64,

    /// Changed row count, when the backend reported one separately.
    pub changed_rows: Option<u64>,

    /// Backend-assigned id of the last inserted row, if any.
    pub insert_id: Option<u64>,
}

/// Normalized result of a mutating statement.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecResult {
    pub affected_rows: u64,

    /// `0` when the statement assigned no id.
    pub insert_id: u64,
}

impl From<WriteSummary> for ExecResult {
    fn from(summary: WriteSummary) -> Self {
        Self {
            affected_rows: summary.changed_rows.unwrap_or(summary.affected_rows),
            insert_id: summary.insert_id.unwrap_or(0),
        }
    }
}
