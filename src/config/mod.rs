//! Configuration module
//!
//! - types/mod.rs: Core configuration types (Config, ServerConfig, LoggingConfig)
//! - types/storage.rs: Storage backend configuration
//! - io.rs: Configuration loading and env overrides
//! - validation.rs: Configuration validation
//! - paths.rs: Configuration file paths

mod io;
mod paths;
mod types;
mod validation;

pub use types::{Config, LogFormat, LoggingConfig, ServerConfig};

pub use types::storage::{PostgresConfig, StorageBackendType, StorageConfig};

pub use io::{apply_env_overrides, load_config, load_config_from_path, load_config_with, parse_duration};
pub use paths::{config_dir, config_path};
pub use validation::{validate_config, ConfigValidationResult, ValidationIssue};
