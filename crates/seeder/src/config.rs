//! Configuration types for seeding runs.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

/// Number of users generated by the default seed run.
pub const DEFAULT_USER_COUNT: usize = 180;

/// Maximum rows per multi-row `INSERT` statement.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid DB_PORT '{0}': expected a port number")]
    InvalidPort(String),
    #[error("Invalid SEED_RNG '{0}': expected an unsigned integer")]
    InvalidSeed(String),
}

/// Reads keys from the process environment, falling back to a `.env` file.
///
/// The file is parsed without touching the process environment; variables
/// already set in the environment win.
#[derive(Debug, Clone, Default)]
pub struct EnvLookup {
    dotenv: HashMap<String, String>,
}

impl EnvLookup {
    /// Loads `.env` from the current directory or its parents, if any.
    pub fn load() -> Self {
        match dotenvy::dotenv_iter() {
            Ok(iter) => Self::collect(iter),
            Err(_) => Self::default(),
        }
    }

    /// Loads a specific env file; a missing or unreadable file yields no values.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match dotenvy::from_path_iter(path) {
            Ok(iter) => Self::collect(iter),
            Err(_) => Self::default(),
        }
    }

    fn collect(iter: impl Iterator<Item = dotenvy::Result<(String, String)>>) -> Self {
        Self {
            dotenv: iter.filter_map(Result::ok).collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .or_else(|| self.dotenv.get(key).cloned())
    }
}

/// Connection parameters for the target PostgreSQL database.
#[derive(Clone, Serialize, Deserialize)]
pub struct DbConfig {
    pub database: String,
    pub user: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl DbConfig {
    /// Loads `.env` (if present) and reads the `DB_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = EnvLookup::load();
        Self::from_lookup(|key| env.get(key))
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults
    /// for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, fallback: &str| lookup(key).unwrap_or_else(|| fallback.to_string());

        let raw_port = get("DB_PORT", "5432");
        let port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw_port.clone()))?;

        Ok(Self {
            database: get("DB_NAME", "postgres"),
            user: get("DB_USERNAME", "postgres"),
            password: get("DB_PASSWORD", "postgres"),
            host: get("DB_HOST", "localhost"),
            port,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// Configuration for a seed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of users to generate.
    pub user_count: usize,

    /// Maximum rows per insert statement.
    pub batch_size: usize,

    /// Fixed RNG seed for reproducible data. Entropy is used when absent.
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            user_count: DEFAULT_USER_COUNT,
            batch_size: DEFAULT_BATCH_SIZE,
            rng_seed: None,
        }
    }
}

impl SeedConfig {
    /// Loads `.env` (if present) and reads `SEED_RNG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = EnvLookup::load();
        Self::from_lookup(|key| env.get(key))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let rng_seed = match lookup("SEED_RNG") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?,
            ),
            None => None,
        };

        Ok(Self {
            rng_seed,
            ..Self::default()
        })
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}
