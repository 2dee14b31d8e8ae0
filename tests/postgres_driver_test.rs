use pgdriver::config::DatasourceConfig;
use pgdriver::driver::postgres::PostgresDriver;
use pgdriver::driver::{Driver, UrlBuilder};
use pgdriver::error::ConfigError;
use serde_json::json;

#[test]
fn test_driver_name() {
    let driver = PostgresDriver::new();
    assert_eq!(driver.name(), "PostgreSQL");
}

#[test]
fn test_driver_type() {
    let driver = PostgresDriver::new();
    assert_eq!(driver.r#type(), "postgresql");
}

#[test]
fn test_driver_class_name() {
    let driver = PostgresDriver::new();
    assert_eq!(driver.class_name(), "org.postgresql.Driver");
}

#[test]
fn test_build_connection_url() {
    let driver = PostgresDriver::new();
    let config = DatasourceConfig::new().driver("postgresql").database("mydb");

    let url = driver.build_connection_url(&config).unwrap();
    assert_eq!(url, "jdbc:postgresql://localhost:5430/mydb?");
}

#[test]
fn test_build_connection_url_no_database() {
    let driver = PostgresDriver::new();
    let config = DatasourceConfig::new();

    let err = driver.build_connection_url(&config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingProperty {
            property: "database",
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "The database property is required for the PostgreSQL JDBC driver"
    );
}

#[test]
fn test_build_connection_url_empty_database() {
    let driver = PostgresDriver::new();
    let config = DatasourceConfig::new().database("").param("ssl", "true");

    assert!(driver.build_connection_url(&config).is_err());
}

#[test]
fn test_host_and_port_override() {
    let driver = PostgresDriver::new();
    let config = DatasourceConfig::new()
        .database("mydb")
        .host("db.example.com")
        .port("5432");

    let url = driver.build_connection_url(&config).unwrap();
    assert_eq!(url, "jdbc:postgresql://db.example.com:5432/mydb?");
}

#[test]
fn test_empty_host_falls_back_to_default() {
    let driver = PostgresDriver::new();
    let config = DatasourceConfig::new().database("mydb").host("");

    let url = driver.build_connection_url(&config).unwrap();
    assert_eq!(url, "jdbc:postgresql://localhost:5430/mydb?");
}

#[test]
fn test_unset_port_variants_fall_back_to_default() {
    let driver = PostgresDriver::new();

    for config in [
        DatasourceConfig::new().database("mydb"),
        DatasourceConfig::new().database("mydb").port(""),
        DatasourceConfig::new().database("mydb").port("0"),
    ] {
        let url = driver.build_connection_url(&config).unwrap();
        assert_eq!(url, "jdbc:postgresql://localhost:5430/mydb?");
    }
}

#[test]
fn test_custom_param_lands_in_query_string() {
    let driver = PostgresDriver::new();
    let config = DatasourceConfig::new().database("mydb").param("ssl", "true");

    let url = driver.build_connection_url(&config).unwrap();
    assert_eq!(url, "jdbc:postgresql://localhost:5430/mydb?ssl=true");
}

#[test]
fn test_custom_params_join_with_delimiter() {
    let driver = PostgresDriver::new();
    let config = DatasourceConfig::new()
        .database("mydb")
        .param("ssl", "true")
        .param("connectTimeout", 10);

    let url = driver.build_connection_url(&config).unwrap();
    assert_eq!(
        url,
        "jdbc:postgresql://localhost:5430/mydb?connectTimeout=10&ssl=true"
    );
}

#[test]
fn test_driver_key_never_reaches_query_string() {
    let driver = PostgresDriver::new();
    let config = DatasourceConfig::new().driver("postgresql").database("mydb");

    let url = driver.build_connection_url(&config).unwrap();
    assert!(url.ends_with('?'));
}

#[test]
fn test_build_is_idempotent_and_does_not_mutate() {
    let driver = PostgresDriver::new();
    let config = DatasourceConfig::new()
        .database("mydb")
        .host("db.example.com")
        .port(5432)
        .param("ssl", "true");
    let snapshot = config.clone();

    let first = driver.build_connection_url(&config).unwrap();
    let second = driver.build_connection_url(&config).unwrap();
    assert_eq!(first, second);
    assert_eq!(config, snapshot);
}

#[test]
fn test_build_connection_url_from_json_bag() {
    let driver = PostgresDriver::new();
    let config = DatasourceConfig::parse(json!({
        "driver": "postgresql",
        "database": "mydb",
        "port": 5432,
        "ssl": true
    }))
    .unwrap();

    let url = driver.build_connection_url(&config).unwrap();
    assert_eq!(url, "jdbc:postgresql://localhost:5432/mydb?ssl=true");
}

#[test]
fn test_json_bag_zero_port_falls_back() {
    let driver = PostgresDriver::new();
    let config = DatasourceConfig::parse(json!({
        "database": "mydb",
        "port": 0
    }))
    .unwrap();

    let url = driver.build_connection_url(&config).unwrap();
    assert_eq!(url, "jdbc:postgresql://localhost:5430/mydb?");
}
