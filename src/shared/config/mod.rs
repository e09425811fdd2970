//! Server configuration module
//!
//! Provides the configuration consumed at startup. Values come from an
//! explicit builder (tests), from an optional TOML file named by
//! `BLOG_CONFIG`, and from environment variables, which take precedence over
//! the file.
//!
//! The signing secret is loaded once here and handed to the token service;
//! nothing else in the crate reads `JWT_SECRET`.

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

/// Default token lifetime (one hour)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Symmetric key used to sign and verify identity tokens
    pub jwt_secret: String,
    /// Postgres connection URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    /// bcrypt cost used when hashing new passwords
    pub bcrypt_cost: u32,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("jwt_secret", &"<redacted>")
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("port", &self.port)
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from `BLOG_CONFIG` (if set) and the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = match std::env::var("BLOG_CONFIG") {
            Ok(path) => ServerConfigBuilder::from_file(path)?,
            Err(_) => ServerConfigBuilder::default(),
        };

        if let Ok(secret) = std::env::var("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Ok(port) = std::env::var("SERVER_PORT") {
            builder = builder.port(parse_value("SERVER_PORT", &port)?);
        }
        if let Ok(ttl) = std::env::var("TOKEN_TTL_SECS") {
            builder = builder.token_ttl(Duration::from_secs(parse_value("TOKEN_TTL_SECS", &ttl)?));
        }
        if let Ok(cost) = std::env::var("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_value("BCRYPT_COST", &cost)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.token_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                value: "0".to_string(),
            });
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// On-disk form of the configuration; every key is optional
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    jwt_secret: Option<String>,
    database_url: Option<String>,
    port: Option<u16>,
    token_ttl_secs: Option<u64>,
    bcrypt_cost: Option<u32>,
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    jwt_secret: Option<String>,
    database_url: Option<String>,
    port: Option<u16>,
    token_ttl: Option<Duration>,
    bcrypt_cost: Option<u32>,
}

impl ServerConfigBuilder {
    /// Start from the values in a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }

    /// Start from the values in a TOML document
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let file: FileConfig =
            toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(Self {
            jwt_secret: file.jwt_secret,
            database_url: file.database_url,
            port: file.port,
            token_ttl: file.token_ttl_secs.map(Duration::from_secs),
            bcrypt_cost: file.bcrypt_cost,
        })
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the token lifetime
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            database_url: self.database_url.filter(|url| !url.is_empty()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            token_ttl: self.token_ttl.unwrap_or(DEFAULT_TOKEN_TTL),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to read config file {path}: {message}")]
    Io { path: String, message: String },
    #[error("failed to parse config file: {0}")]
    Parse(String),
}
