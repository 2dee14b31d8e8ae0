pub mod config;
pub mod driver;
pub mod error;

pub use config::{DatasourceConfig, ParamValue};
#[cfg(feature = "postgres")]
pub use driver::postgres::PostgresDriver;
pub use driver::{Driver, DriverDefaults, UrlBuilder};
pub use error::{ConfigError, Result};
