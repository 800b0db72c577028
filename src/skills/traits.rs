//! Skill storage trait
//!
//! Handlers only see this interface; the concrete backend is chosen at
//! startup and injected through the router state.

use async_trait::async_trait;

use super::types::{Skill, SkillField};
use crate::error::Result;

/// Message used for [`crate::Error::NotFound`] on skill lookups
pub const SKILL_NOT_FOUND: &str = "Skill not found";

/// Message used for [`crate::Error::Conflict`] on duplicate creates
pub const SKILL_EXISTS: &str = "Skill already exists";

/// Persistent storage for skills
#[async_trait]
pub trait SkillStore: Send + Sync {
    /// Backend name, for logs
    fn id(&self) -> &str;

    /// Fetch one skill. `NotFound` when no row matches.
    async fn get(&self, key: &str) -> Result<Skill>;

    /// All skills in storage order
    async fn list(&self) -> Result<Vec<Skill>>;

    /// Insert a new skill. `Conflict` when the key is taken.
    async fn create(&self, skill: &Skill) -> Result<Skill>;

    /// Overwrite every field except `key`. `NotFound` when no row matches.
    async fn replace(&self, skill: &Skill) -> Result<Skill>;

    /// Overwrite one field and return the updated row. `NotFound` when no row matches.
    async fn update_field(&self, key: &str, field: SkillField) -> Result<Skill>;

    /// Remove a skill. `NotFound` when no row matches.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Health check
    async fn ping(&self) -> Result<()>;
}
