use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

pub const SEED_FILE_VAR: &str = "VEHICLE_STORE_SEED_FILE";
pub const HOST_VAR: &str = "VEHICLE_STORE_HOST";
pub const PORT_VAR: &str = "VEHICLE_STORE_PORT";

const DEFAULT_SEED_FILE: &str = "cars.json";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid VEHICLE_STORE_PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed_file: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_file: PathBuf::from(DEFAULT_SEED_FILE),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match lookup(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };
        Ok(Self {
            seed_file: lookup(SEED_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.seed_file),
            host: lookup(HOST_VAR).unwrap_or(defaults.host),
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
