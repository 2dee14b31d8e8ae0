use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("The {property} property is required for the {driver} JDBC driver")]
    MissingProperty {
        property: &'static str,
        driver: &'static str,
    },
    #[error("Failed to parse datasource configuration options: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
