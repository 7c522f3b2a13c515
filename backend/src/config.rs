//! Server settings read from the environment at startup.
//!
//! | Variable             | Default     |
//! |----------------------|-------------|
//! | `RECIPES_HOST`       | `127.0.0.1` |
//! | `RECIPES_PORT`       | `8080`      |
//! | `RECIPES_JSON_LIMIT` | `1048576`   |

use std::env;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_JSON_LIMIT: usize = 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum accepted size of a JSON request body, in bytes.
    pub json_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            json_limit: DEFAULT_JSON_LIMIT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        Ok(ServerConfig {
            host: lookup("RECIPES_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "RECIPES_PORT", defaults.port)?,
            json_limit: parse_or(&lookup, "RECIPES_JSON_LIMIT", defaults.json_limit)?,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
