mod support;
use support::RecordingDriver;

use mortar::{
    schema::{
        app::{DefaultValue, Field, FieldType, Model, Rules},
        db::Table,
    },
    stmt::{Record, Value},
    Db,
};
use pretty_assertions::assert_eq;

fn event_table() -> Table {
    Model::new("event")
        .field(Field::new("id").db_type("INT").primary_key().auto_increment())
        .field(Field::new("name").db_type("VARCHAR(8)"))
        .field(
            Field::new("kind")
                .ty(FieldType::String)
                .default_value(DefaultValue::literal("info")),
        )
        .field(Field::new("note").db_type("TEXT").require(false))
        .field(
            Field::new("created")
                .db_type("TIMESTAMP")
                .default_value(DefaultValue::Now),
        )
        .normalize()
        .unwrap()
}

fn record(fields: &[(&str, Value)]) -> Record {
    fields
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

#[tokio::test]
async fn fills_defaults() {
    let driver = RecordingDriver::new();
    let db = Db::builder().build(driver.clone());

    let before = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64;

    db.insert(&event_table(), record(&[("name", Value::from("boot"))]))
        .await
        .unwrap();

    let log = driver.log();
    assert_eq!(
        log[0].sql,
        "INSERT INTO `event` (`name`, `kind`, `created`) VALUES (?, ?, ?);"
    );
    assert_eq!(log[0].params[..2], [Value::from("boot"), Value::from("info")]);

    let Value::I64(created) = log[0].params[2] else {
        panic!("expected epoch milliseconds, got {:?}", log[0].params[2]);
    };
    assert!(created >= before, "{created} < {before}");
}

#[tokio::test]
async fn explicit_values_win() {
    let driver = RecordingDriver::new();
    let db = Db::builder().build(driver.clone());

    db.insert(
        &event_table(),
        record(&[
            ("created", Value::from(5)),
            ("note", Value::Null),
            ("name", Value::from("boot")),
            ("id", Value::from(9)),
        ]),
    )
    .await
    .unwrap();

    let log = driver.log();
    assert_eq!(
        log[0].sql,
        "INSERT INTO `event` (`id`, `name`, `kind`, `note`, `created`) VALUES (?, ?, ?, ?, ?);"
    );
    assert_eq!(
        log[0].params,
        [
            Value::from(9),
            Value::from("boot"),
            Value::from("info"),
            Value::Null,
            Value::from(5),
        ]
    );
}

#[tokio::test]
async fn missing_required_column_is_rejected() {
    let driver = RecordingDriver::new();
    let db = Db::builder().build(driver.clone());

    let err = db.insert(&event_table(), Record::new()).await.unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("`name`"), "{err}");
    assert!(driver.log().is_empty());
}

#[tokio::test]
async fn length_rules_are_checked() {
    let driver = RecordingDriver::new();
    let db = Db::builder().build(driver.clone());

    // VARCHAR(8) implies a maximum length of 8
    let err = db
        .insert(&event_table(), record(&[("name", Value::from("overflowing"))]))
        .await
        .unwrap_err();
    assert!(err.is_validation(), "{err}");

    let table = Model::new("account")
        .field(Field::new("handle").ty(FieldType::String).rules(Rules {
            min_length: Some(3),
            ..Rules::default()
        }))
        .normalize()
        .unwrap();

    let err = db
        .insert(&table, record(&[("handle", Value::from("ab"))]))
        .await
        .unwrap_err();
    assert!(err.is_validation(), "{err}");

    assert!(driver.log().is_empty());
}

#[tokio::test]
async fn unknown_columns_are_rejected() {
    let driver = RecordingDriver::new();
    let db = Db::builder().build(driver.clone());

    let err = db
        .insert(
            &event_table(),
            record(&[("name", Value::from("boot")), ("colour", Value::from("red"))]),
        )
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("`colour`"), "{err}");
    assert!(driver.log().is_empty());
}
