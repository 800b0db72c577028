//! In-memory skill storage
//!
//! Keeps skills in insertion order behind an async RwLock. Nothing is
//! persisted; used for the `memory` backend and for tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::skills::{Skill, SkillField, SkillStore, SKILL_EXISTS, SKILL_NOT_FOUND};

#[derive(Debug, Default)]
pub struct InMemorySkillStore {
    skills: RwLock<Vec<Skill>>,
}

impl InMemorySkillStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found() -> Error {
    Error::NotFound(SKILL_NOT_FOUND.to_string())
}

#[async_trait]
impl SkillStore for InMemorySkillStore {
    fn id(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Skill> {
        let skills = self.skills.read().await;
        skills
            .iter()
            .find(|s| s.key == key)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn list(&self) -> Result<Vec<Skill>> {
        Ok(self.skills.read().await.clone())
    }

    async fn create(&self, skill: &Skill) -> Result<Skill> {
        let mut skills = self.skills.write().await;
        if skills.iter().any(|s| s.key == skill.key) {
            return Err(Error::Conflict(SKILL_EXISTS.to_string()));
        }
        skills.push(skill.clone());
        Ok(skill.clone())
    }

    async fn replace(&self, skill: &Skill) -> Result<Skill> {
        let mut skills = self.skills.write().await;
        let existing = skills
            .iter_mut()
            .find(|s| s.key == skill.key)
            .ok_or_else(not_found)?;
        *existing = skill.clone();
        Ok(skill.clone())
    }

    async fn update_field(&self, key: &str, field: SkillField) -> Result<Skill> {
        let mut skills = self.skills.write().await;
        let existing = skills
            .iter_mut()
            .find(|s| s.key == key)
            .ok_or_else(not_found)?;
        existing.apply(field);
        Ok(existing.clone())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut skills = self.skills.write().await;
        let before = skills.len();
        skills.retain(|s| s.key != key);
        if skills.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(key: &str, name: &str) -> Skill {
        Skill {
            key: key.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_conflict() {
        let store = InMemorySkillStore::new();
        store.create(&skill("go", "Go")).await.unwrap();
        let err = store.create(&skill("go", "Golang")).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
        assert_eq!(store.get("go").await.unwrap().name, "Go");
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = InMemorySkillStore::new();
        assert!(store.list().await.unwrap().is_empty());
        for key in ["python", "go", "rust"] {
            store.create(&skill(key, key)).await.unwrap();
        }
        let keys: Vec<String> = store.list().await.unwrap().into_iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["python", "go", "rust"]);
    }

    #[tokio::test]
    async fn test_missing_key_operations() {
        let store = InMemorySkillStore::new();
        assert!(matches!(store.get("nope").await, Err(Error::NotFound(_))));
        assert!(matches!(store.replace(&skill("nope", "x")).await, Err(Error::NotFound(_))));
        assert!(matches!(
            store.update_field("nope", SkillField::Name("x".into())).await,
            Err(Error::NotFound(_))
        ));
        assert!(matches!(store.delete("nope").await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_concurrent_creates_have_one_winner() {
        let store = std::sync::Arc::new(InMemorySkillStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(&skill("race", &i.to_string())).await })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }
        assert_eq!(created, 1);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
