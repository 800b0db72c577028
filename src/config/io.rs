//! Configuration I/O - Loading configuration
//!
//! Handles reading configuration from files and environment variables.

use std::path::Path;
use std::time::Duration;

use secrecy::SecretString;

use super::types::storage::{PostgresConfig, StorageBackendType};
use super::types::Config;
use crate::error::{Error, Result};

/// Load configuration with layered precedence:
/// 1. Config file if it exists, otherwise defaults
/// 2. Environment variable overrides (includes .env)
pub fn load_config() -> Result<Config> {
    load_config_with(None)
}

/// Same as [`load_config`], reading the file at `path` instead of the default location.
///
/// An explicitly given path must exist; the default path is optional.
pub fn load_config_with(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => load_config_from_path(path)?,
        None => {
            let default_path = super::paths::config_path();
            if default_path.exists() {
                load_config_from_path(&default_path)?
            } else {
                Config::default()
            }
        }
    };

    apply_env_overrides(&mut config);

    Ok(config)
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    let extension = path.extension().and_then(|ext| ext.to_str());
    let config: Config = match extension {
        Some("toml") => toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid TOML config: {}", e)))?,
        Some("json") | Some("json5") => json5::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid JSON config: {}", e)))?,
        _ => json5::from_str(&content)
            .or_else(|_| toml::from_str(&content).map_err(|e| Error::Config(e.to_string())))
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?,
    };

    Ok(config)
}

/// Apply environment variable overrides to an existing config.
///
/// Loads `.env` first if present. Env vars have the highest precedence
/// after command-line flags: defaults < file < env < flags.
pub fn apply_env_overrides(config: &mut Config) {
    dotenvy::dotenv().ok();
    apply_overrides_from(config, |name| std::env::var(name).ok());
}

/// Apply overrides using `lookup` to resolve variable names.
pub(crate) fn apply_overrides_from<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    // Database overrides
    if let Some(url) = lookup("POSTGRES_URI").or_else(|| lookup("DATABASE_URL")) {
        let pg = config
            .storage
            .postgres
            .get_or_insert_with(|| PostgresConfig::with_url(String::new()));
        pg.url = SecretString::from(url);
    }
    if let Some(max_conn) = lookup("DATABASE_MAX_CONNECTIONS") {
        if let (Some(pg), Ok(v)) = (config.storage.postgres.as_mut(), max_conn.parse()) {
            pg.max_connections = v;
        }
    }
    if let Some(timeout) = lookup("DATABASE_TIMEOUT") {
        if let (Some(pg), Ok(v)) = (config.storage.postgres.as_mut(), timeout.parse()) {
            pg.connect_timeout_secs = v;
        }
    }
    if let Some(backend) = lookup("STORAGE_BACKEND") {
        match backend.parse::<StorageBackendType>() {
            Ok(backend) => config.storage.backend = backend,
            Err(e) => tracing::warn!("Ignoring STORAGE_BACKEND: {}", e),
        }
    }

    // Server overrides
    if let Some(port) = lookup("PORT") {
        match port.parse() {
            Ok(port) => config.server.port = port,
            Err(e) => tracing::warn!("Ignoring PORT={}: {}", port, e),
        }
    }
    if let Some(bind) = lookup("BIND_ADDRESS") {
        config.server.bind = bind;
    }
    if let Some(grace) = lookup("SHUTDOWN_GRACE") {
        match parse_duration(&grace) {
            Ok(grace) => config.server.shutdown_grace = grace,
            Err(e) => tracing::warn!("Ignoring SHUTDOWN_GRACE: {}", e),
        }
    }

    // Logging overrides
    if let Some(format) = lookup("LOG_FORMAT") {
        if let Ok(format) = format.parse() {
            config.logging.format = format;
        }
    }
}

/// Parse a human-readable duration such as `5s` or `1m 30s`
pub fn parse_duration(value: &str) -> Result<Duration> {
    humantime_serde::re::humantime::parse_duration(value)
        .map_err(|e| Error::Config(format!("Invalid duration '{}': {}", value, e)))
}
