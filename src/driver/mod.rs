use std::collections::BTreeMap;

use crate::config::{DatasourceConfig, ParamValue};
use crate::error::Result;

#[cfg(feature = "postgres")]
pub mod postgres;

/// Builds a vendor-specific connection URL from a datasource configuration.
///
/// Implemented independently per database vendor. Implementations are pure:
/// the same configuration always yields the same URL, the input is never
/// mutated, and nothing is logged.
pub trait UrlBuilder {
    /// Assembles the full connection URL for `config`.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingProperty`](crate::error::ConfigError)
    /// when a required property is absent or empty. Optional properties
    /// never fail; they fall back to the driver's defaults.
    fn build_connection_url(&self, config: &DatasourceConfig) -> Result<String>;
}

/// A pluggable JDBC datasource driver.
///
/// This is what a host framework reads off a driver at registration time:
/// a symbolic name, a type tag, the JDBC class to load, and the driver's
/// fixed defaults. Registration itself, pooling and class loading live in
/// the host, not here.
pub trait Driver: UrlBuilder + Send + Sync {
    /// Symbolic driver name, e.g. `"PostgreSQL"`.
    fn name(&self) -> &str;

    /// Driver type tag, e.g. `"postgresql"`.
    fn r#type(&self) -> &str;

    /// Fully qualified JDBC driver class name.
    fn class_name(&self) -> &str;

    /// The fixed defaults this driver was constructed with.
    fn defaults(&self) -> &DriverDefaults;

    /// Serializes the custom connection parameters of `config` into a query
    /// string.
    ///
    /// The driver's default params seed the map and config-supplied params
    /// override them on key collision. Pairs are rendered as `key=value` and
    /// joined with the driver's delimiter; no params yields an empty string.
    fn custom_params_query_string(&self, config: &DatasourceConfig) -> String {
        let defaults = self.defaults();
        let mut params = defaults.custom_params.clone();
        for (name, value) in &config.custom {
            params.insert(name.clone(), value.clone());
        }
        params
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join(defaults.delimiter)
    }
}

/// Fixed defaults of one vendor driver, built once in the driver
/// constructor and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverDefaults {
    /// Fully qualified JDBC driver class name.
    pub class_name: &'static str,
    /// Host substituted when the configuration carries none.
    pub host: &'static str,
    /// Port substituted when the configuration carries none.
    pub port: &'static str,
    /// Delimiter between query-string parameter pairs.
    pub delimiter: &'static str,
    /// Params every connection URL of this vendor starts from.
    pub custom_params: BTreeMap<String, ParamValue>,
    /// Connection-pool properties the host framework may consult when it
    /// sets up pooling. Inert data as far as this crate is concerned.
    pub pool_properties: BTreeMap<String, ParamValue>,
}
