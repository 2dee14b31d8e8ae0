use std::collections::BTreeMap;

use crate::config::DatasourceConfig;
use crate::driver::{Driver, DriverDefaults, UrlBuilder};
use crate::error::{ConfigError, Result};

const POSTGRES_NAME: &str = "PostgreSQL";
const POSTGRES_TYPE: &str = "postgresql";

const DEFAULT_CLASS_NAME: &str = "org.postgresql.Driver";
const DEFAULT_PORT: &str = "5430";
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_DELIMITER: &str = "&";

/// The PostgreSQL JDBC driver adapter.
///
/// Builds URLs of the form `jdbc:postgresql://host:port/database?params`,
/// see <https://jdbc.postgresql.org/documentation/use/>.
pub struct PostgresDriver {
    defaults: DriverDefaults,
}

impl PostgresDriver {
    pub fn new() -> Self {
        Self {
            defaults: DriverDefaults {
                class_name: DEFAULT_CLASS_NAME,
                host: DEFAULT_HOST,
                port: DEFAULT_PORT,
                delimiter: DEFAULT_DELIMITER,
                custom_params: BTreeMap::new(),
                pool_properties: BTreeMap::new(),
            },
        }
    }
}

impl Default for PostgresDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlBuilder for PostgresDriver {
    fn build_connection_url(&self, config: &DatasourceConfig) -> Result<String> {
        // The database is the only required property.
        if config.database.is_empty() {
            return Err(ConfigError::MissingProperty {
                property: "database",
                driver: POSTGRES_NAME,
            });
        }

        let host = if config.host.is_empty() {
            self.defaults.host
        } else {
            config.host.as_str()
        };

        // Port zero means "not configured", same as absent or empty.
        // Anything else passes through verbatim, numeric or not.
        let port = match &config.port {
            Some(value) => {
                let port = value.to_string();
                if port.is_empty() || port == "0" {
                    self.defaults.port.to_string()
                } else {
                    port
                }
            }
            None => self.defaults.port.to_string(),
        };

        Ok(format!(
            "jdbc:postgresql://{}:{}/{}?{}",
            host,
            port,
            config.database,
            self.custom_params_query_string(config)
        ))
    }
}

impl Driver for PostgresDriver {
    fn name(&self) -> &str {
        POSTGRES_NAME
    }

    fn r#type(&self) -> &str {
        POSTGRES_TYPE
    }

    fn class_name(&self) -> &str {
        self.defaults.class_name
    }

    fn defaults(&self) -> &DriverDefaults {
        &self.defaults
    }
}
