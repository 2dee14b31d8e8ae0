use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// A single scalar connection property value.
///
/// Host frameworks hand configuration over as loosely typed property bags,
/// so a value may arrive as a string, an integer, a float, or a bool.
/// `Display` gives the pass-through form used when the value is embedded in
/// a connection URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Float(x)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for ParamValue {
            fn from(n: $t) -> Self {
                ParamValue::Int(i64::from(n))
            }
        }
    )*};
}

impl_from_int!(i8, i16, i32, u8, u16, u32);

/// Typed view of the configuration a host framework supplies for one
/// configured datasource.
///
/// The structural fields are the keys the URL builders consume directly:
/// `driver` (the host's driver selector, reserved), `database`, `host` and
/// `port`. Every other key lands in `custom` and passes through verbatim
/// into the connection URL's query string.
///
/// Absence is modeled leniently, the way property bags behave: an empty
/// `database` or `host` string means the key was not provided.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasourceConfig {
    /// Host-framework driver selector. Reserved, never serialized into the
    /// query string.
    #[serde(default)]
    pub driver: String,
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub host: String,
    /// May be supplied as a string or a number; rendered to its string form
    /// when the URL is assembled.
    #[serde(default)]
    pub port: Option<ParamValue>,
    /// Unrecognized keys, passed through as custom connection parameters.
    #[serde(flatten)]
    pub custom: BTreeMap<String, ParamValue>,
}

impl DatasourceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the host-framework driver selector.
    pub fn driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = driver.into();
        self
    }

    /// Sets the target database name.
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Sets the database server host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the database server port.
    pub fn port(mut self, port: impl Into<ParamValue>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Adds a custom connection parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.custom.insert(name.into(), value.into());
        self
    }

    /// Parses a dynamic property bag as handed over by a host framework.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConfig` if the bag does not deserialize,
    /// e.g. a structural field of the wrong shape or a non-scalar custom
    /// value.
    pub fn parse(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidConfig(e.to_string()))
    }
}
