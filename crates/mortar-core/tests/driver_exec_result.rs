use mortar_core::driver::{ExecResult, WriteSummary};

#[test]
fn changed_rows_take_precedence() {
    let result = ExecResult::from(WriteSummary {
        affected_rows: 5,
        changed_rows: Some(3),
        insert_id: None,
    });

    assert_eq!(
        result,
        ExecResult {
            affected_rows: 3,
            insert_id: 0,
        }
    );
}

#[test]
fn affected_rows_used_when_no_changed_count() {
    let result = ExecResult::from(WriteSummary {
        affected_rows: 1,
        changed_rows: None,
        insert_id: Some(42),
    });

    assert_eq!(result.affected_rows, 1);
    assert_eq!(result.insert_id, 42);
}
