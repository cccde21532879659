//! Runtime settings.
//!
//! Settings come from built-in defaults, then an optional `setcal.{toml,json,yaml}`
//! file in the working directory (or the file named by `SETCAL_CONFIG`), then
//! `SETCAL_`-prefixed environment variables such as `SETCAL_MAX_ROWS`.

use ::config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{Result, SetcalError};

pub const DEFAULT_MAX_ROWS: usize = 1000;
pub const DEFAULT_CONFIG_NAME: &str = "setcal";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ceiling on the number of U/S/R rows in one file.
    pub max_rows: usize,
    /// Log filter directive used when `RUST_LOG` is not set.
    pub log: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            log: String::from("warn"),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let name = std::env::var("SETCAL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_NAME.to_string());
        Self::load_from(&name)
    }

    /// Loads settings from the named file (extension optional, the file may be
    /// missing) layered under the environment.
    pub fn load_from(name: &str) -> Result<Self> {
        let settings: Settings = Config::builder()
            .add_source(File::with_name(name).required(false))
            .add_source(Environment::with_prefix("SETCAL").try_parsing(true))
            .build()?
            .try_deserialize()?;
        settings.validate()
    }

    pub fn validate(self) -> Result<Self> {
        if self.max_rows == 0 {
            return Err(SetcalError::Config(String::from(
                "max_rows must be at least 1",
            )));
        }
        Ok(self)
    }
}
