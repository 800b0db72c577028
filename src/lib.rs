//! # Skills API
//!
//! A small CRUD HTTP API for "skills" (key, name, description, logo, tags)
//! stored in a single PostgreSQL table.
//!
//! ## Layout
//!
//! - **skills:** the entity, request payloads and the `SkillStore` trait
//! - **database:** PostgreSQL and in-memory `SkillStore` implementations
//! - **api:** axum handlers, response envelope and router
//! - **server:** listener lifecycle with bounded graceful shutdown

pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod server;
pub mod skills;
pub mod telemetry;

pub use config::Config;
pub use error::{Error, Result};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = env!("CARGO_PKG_NAME");
