mod support;
use support::RecordingDriver;

use mortar::{
    driver::{ExecResult, WriteSummary},
    stmt::Value,
    Db,
};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn changed_rows_win_over_affected_rows() {
    let driver = RecordingDriver::new();
    driver.respond_with(WriteSummary {
        affected_rows: 5,
        changed_rows: Some(3),
        insert_id: None,
    });
    let db = Db::builder().build(driver);

    let res = db
        .exec("UPDATE `user` SET `active` = ?", &[Value::from(true)])
        .await
        .unwrap();

    assert_eq!(
        res,
        ExecResult {
            affected_rows: 3,
            insert_id: 0
        }
    );
}

#[tokio::test]
async fn affected_rows_and_insert_id() {
    let driver = RecordingDriver::new();
    driver.respond_with(WriteSummary {
        affected_rows: 1,
        changed_rows: None,
        insert_id: Some(42),
    });
    let db = Db::builder().build(driver);

    let res = db
        .exec("INSERT INTO `user` (`email`) VALUES (?)", &[Value::from("a@b.c")])
        .await
        .unwrap();

    assert_eq!(res.affected_rows, 1);
    assert_eq!(res.insert_id, 42);
}

#[tokio::test]
async fn statements_and_params_reach_the_driver() {
    let driver = RecordingDriver::new();
    let db = Db::builder().build(driver.clone());

    db.query("SELECT * FROM `user` WHERE `id` = ?", &[Value::from(7)])
        .await
        .unwrap();

    let log = driver.log();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].sql, "SELECT * FROM `user` WHERE `id` = ?");
    assert_eq!(log[0].params, [Value::I64(7)]);
}

#[tokio::test]
async fn clones_share_the_driver() {
    let driver = RecordingDriver::new();
    let db = Db::builder().build(driver.clone());
    let other = db.clone();

    db.exec("DELETE FROM `a`", &[]).await.unwrap();
    other.exec("DELETE FROM `b`", &[]).await.unwrap();

    assert_eq!(driver.statements(), ["DELETE FROM `a`", "DELETE FROM `b`"]);
}
