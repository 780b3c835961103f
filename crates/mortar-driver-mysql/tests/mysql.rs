#![cfg(feature = "mysql-tests")]

use mortar_core::{driver::Driver, stmt::Value};
use mortar_driver_mysql::MySQL;
use pretty_assertions::assert_eq;

fn driver() -> MySQL {
    let url = std::env::var("MORTAR_TEST_MYSQL_URL")
        .unwrap_or_else(|_| "mysql://localhost:3306/mortar_test".to_string());
    MySQL::from_url(&url).expect("invalid MORTAR_TEST_MYSQL_URL")
}

#[tokio::test]
async fn round_trip() {
    let driver = driver();
    driver.init().await.unwrap();

    driver
        .exec("DROP TABLE IF EXISTS `mortar_round_trip`", &[])
        .await
        .unwrap();
    driver
        .exec(
            "CREATE TABLE `mortar_round_trip` (\
                `id` INT NOT NULL AUTO_INCREMENT, \
                `name` VARCHAR(32) NOT NULL, \
                PRIMARY KEY (`id`))",
            &[],
        )
        .await
        .unwrap();

    let summary = driver
        .exec(
            "INSERT INTO `mortar_round_trip` (`name`) VALUES (?), (?), (?)",
            &[Value::from("a"), Value::from("b"), Value::from("c")],
        )
        .await
        .unwrap();
    assert_eq!(summary.affected_rows, 3);
    assert_eq!(summary.insert_id, Some(1));

    // Two of the three rows already hold the new value
    driver
        .exec("UPDATE `mortar_round_trip` SET `name` = 'b' WHERE `id` = 1", &[])
        .await
        .unwrap();
    driver
        .exec("UPDATE `mortar_round_trip` SET `name` = 'c' WHERE `id` = 2", &[])
        .await
        .unwrap();
    let summary = driver
        .exec("UPDATE `mortar_round_trip` SET `name` = 'c'", &[])
        .await
        .unwrap();
    assert_eq!(summary.changed_rows, Some(1));

    let rows = driver
        .query(
            "SELECT `id`, `name` FROM `mortar_round_trip` WHERE `id` = ?",
            &[Value::from(2)],
        )
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], Value::from("c"));

    // Cells are typed the same way with and without parameters
    let unbound = driver
        .query("SELECT `id` FROM `mortar_round_trip` WHERE `id` = 2", &[])
        .await
        .unwrap();
    let bound = driver
        .query(
            "SELECT `id` FROM `mortar_round_trip` WHERE `id` = ?",
            &[Value::from(2)],
        )
        .await
        .unwrap();
    assert_eq!(unbound[0]["id"], Value::I64(2));
    assert_eq!(unbound, bound);

    let err = driver
        .query("SHOW CREATE TABLE `mortar_missing_table`", &[])
        .await
        .unwrap_err();
    assert!(driver.is_no_such_table(&err), "{err}");

    driver
        .exec("DROP TABLE `mortar_round_trip`", &[])
        .await
        .unwrap();
    driver.close().await.unwrap();
}
