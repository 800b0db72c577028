//! Configuration validation
//!
//! Validates configuration and reports issues.

use secrecy::ExposeSecret;

use super::types::storage::StorageBackendType;
use super::types::Config;

/// Result of configuration validation
#[derive(Debug, Clone)]
pub struct ConfigValidationResult {
    /// Whether the config is valid
    pub valid: bool,
    /// Validation errors (critical)
    pub errors: Vec<ValidationIssue>,
    /// Validation warnings (non-critical)
    pub warnings: Vec<ValidationIssue>,
}

impl ConfigValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        ConfigValidationResult {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error
    pub fn with_error(mut self, issue: ValidationIssue) -> Self {
        self.valid = false;
        self.errors.push(issue);
        self
    }

    /// Add a warning
    pub fn with_warning(mut self, issue: ValidationIssue) -> Self {
        self.warnings.push(issue);
        self
    }
}

/// A validation issue
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Path to the config field
    pub path: String,
    /// Issue message
    pub message: String,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationIssue {
            path: path.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " ({})", suggestion)?;
        }
        Ok(())
    }
}

/// Validate the configuration
pub fn validate_config(config: &Config) -> ConfigValidationResult {
    let mut result = ConfigValidationResult::valid();

    result = validate_server_config(config, result);
    result = validate_storage_config(config, result);

    result
}

fn validate_server_config(config: &Config, mut result: ConfigValidationResult) -> ConfigValidationResult {
    if config.server.port == 0 {
        result = result.with_error(
            ValidationIssue::new("server.port", "Port must be non-zero")
                .with_suggestion("Set the PORT environment variable"),
        );
    }

    if config.server.shutdown_grace.is_zero() {
        result = result.with_error(ValidationIssue::new(
            "server.shutdown_grace",
            "Shutdown grace period must be greater than zero",
        ));
    }

    result
}

fn validate_storage_config(config: &Config, mut result: ConfigValidationResult) -> ConfigValidationResult {
    match config.storage.backend {
        StorageBackendType::Postgres => {
            let has_url = config
                .storage
                .postgres
                .as_ref()
                .is_some_and(|pg| !pg.url.expose_secret().trim().is_empty());

            if !has_url {
                result = result.with_error(
                    ValidationIssue::new(
                        "storage.postgres.url",
                        "PostgreSQL backend selected but no connection string is set",
                    )
                    .with_suggestion("Set the POSTGRES_URI environment variable"),
                );
            }

            if let Some(pg) = &config.storage.postgres {
                if pg.max_connections == 0 {
                    result = result.with_error(ValidationIssue::new(
                        "storage.postgres.max_connections",
                        "Connection pool needs at least one connection",
                    ));
                }
            }
        }
        StorageBackendType::Memory => {
            result = result.with_warning(ValidationIssue::new(
                "storage.backend",
                "In-memory backend selected; skills are lost on restart",
            ));
        }
    }

    result
}
