//! Configuration for hn-hiring
//!
//! Read once from the process environment at startup. `APP_ENV` names the
//! deployment environment and is required; `OUT_DIR` overrides where output
//! artifacts land and defaults to the working directory.

use crate::error::{Error, Result};
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable naming the deployment environment (required)
pub const APP_ENV: &str = "APP_ENV";

/// Environment variable overriding the output directory (optional)
pub const OUT_DIR: &str = "OUT_DIR";

/// Output directory used when `OUT_DIR` is not set
const DEFAULT_OUT_DIR: &str = "./";

/// Deployment environment the process runs in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// Local development
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Test,
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            other => Err(Error::Config {
                message: format!(
                    "invalid environment '{other}', expected one of development, production, test"
                ),
                key: Some(APP_ENV.to_string()),
            }),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
        };
        write!(f, "{name}")
    }
}

/// Runtime configuration for a run
#[derive(Clone, Debug)]
pub struct Config {
    /// Deployment environment, from `APP_ENV`
    pub environment: Environment,

    /// Directory the output artifacts are written to, from `OUT_DIR`
    pub out_dir: PathBuf,
}

impl Config {
    /// Read the configuration from the process environment
    ///
    /// Fails if `APP_ENV` is missing or not one of the recognized
    /// environments. `OUT_DIR` is optional and defaults to `"./"`.
    pub fn from_env() -> Result<Self> {
        let environment = match std::env::var(APP_ENV) {
            Ok(value) => value.parse()?,
            Err(_) => {
                return Err(Error::Config {
                    message: format!("{APP_ENV} is not set"),
                    key: Some(APP_ENV.to_string()),
                });
            }
        };

        let out_dir = std::env::var(OUT_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUT_DIR));

        Ok(Self {
            environment,
            out_dir,
        })
    }
}
