//! Skill storage backed by PostgreSQL
//!
//! Every operation is one parameterized statement. Creation is an
//! insert-if-absent, and single-field updates return the updated row from
//! the same statement, so no operation has a check-then-act window.

use async_trait::async_trait;
use sqlx::FromRow;

use super::postgres::{verify_database, PostgresPool};
use crate::error::{Error, Result};
use crate::skills::{Skill, SkillField, SkillStore, SKILL_EXISTS, SKILL_NOT_FOUND};

const SELECT_COLUMNS: &str = "key, name, description, logo, tags";

/// Row as stored; optional columns may be NULL
#[derive(Debug, FromRow)]
struct SkillRow {
    key: String,
    name: String,
    description: Option<String>,
    logo: Option<String>,
    tags: Option<Vec<String>>,
}

impl From<SkillRow> for Skill {
    fn from(row: SkillRow) -> Self {
        Skill {
            key: row.key,
            name: row.name,
            description: row.description.unwrap_or_default(),
            logo: row.logo.unwrap_or_default(),
            tags: row.tags.unwrap_or_default(),
        }
    }
}

/// Skill store backed by PostgreSQL
#[derive(Clone)]
pub struct PgSkillStore {
    pool: PostgresPool,
}

impl PgSkillStore {
    pub fn new(pool: PostgresPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillStore for PgSkillStore {
    fn id(&self) -> &str {
        "postgres"
    }

    async fn get(&self, key: &str) -> Result<Skill> {
        let row: Option<SkillRow> = sqlx::query_as(&format!(
            "SELECT {} FROM skills WHERE key = $1",
            SELECT_COLUMNS
        ))
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Skill::from)
            .ok_or_else(|| Error::NotFound(SKILL_NOT_FOUND.to_string()))
    }

    async fn list(&self) -> Result<Vec<Skill>> {
        let rows: Vec<SkillRow> =
            sqlx::query_as(&format!("SELECT {} FROM skills", SELECT_COLUMNS))
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(Skill::from).collect())
    }

    async fn create(&self, skill: &Skill) -> Result<Skill> {
        let result = sqlx::query(
            r#"
            INSERT INTO skills (key, name, description, logo, tags)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (key) DO NOTHING
        "#,
        )
        .bind(&skill.key)
        .bind(&skill.name)
        .bind(&skill.description)
        .bind(&skill.logo)
        .bind(&skill.tags)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::Conflict(SKILL_EXISTS.to_string()));
        }

        Ok(skill.clone())
    }

    async fn replace(&self, skill: &Skill) -> Result<Skill> {
        let result = sqlx::query(
            "UPDATE skills SET name = $1, description = $2, logo = $3, tags = $4 WHERE key = $5",
        )
        .bind(&skill.name)
        .bind(&skill.description)
        .bind(&skill.logo)
        .bind(&skill.tags)
        .bind(&skill.key)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(SKILL_NOT_FOUND.to_string()));
        }

        Ok(skill.clone())
    }

    async fn update_field(&self, key: &str, field: SkillField) -> Result<Skill> {
        // The column name comes from a fixed set, never from the request.
        let sql = format!(
            "UPDATE skills SET {} = $1 WHERE key = $2 RETURNING {}",
            field.column(),
            SELECT_COLUMNS
        );

        let query = sqlx::query_as::<_, SkillRow>(&sql);
        let query = match field {
            SkillField::Name(v) | SkillField::Description(v) | SkillField::Logo(v) => {
                query.bind(v)
            }
            SkillField::Tags(v) => query.bind(v),
        };

        let row = query.bind(key).fetch_optional(&self.pool).await?;

        row.map(Skill::from)
            .ok_or_else(|| Error::NotFound(SKILL_NOT_FOUND.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM skills WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(SKILL_NOT_FOUND.to_string()));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        verify_database(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    //! These run against a live database: `POSTGRES_URI=... cargo test -- --ignored`

    use super::*;
    use crate::config::PostgresConfig;
    use crate::database::{init_pool, migrations};

    async fn store() -> PgSkillStore {
        let url = std::env::var("POSTGRES_URI").expect("POSTGRES_URI must be set");
        let pool = init_pool(&PostgresConfig::with_url(url)).await.unwrap();
        migrations::run(&pool).await.unwrap();
        PgSkillStore::new(pool)
    }

    fn python(key: &str) -> Skill {
        Skill {
            key: key.to_string(),
            name: "Python".to_string(),
            description: "Python is an interpreted, high-level, general-purpose programming language.".to_string(),
            logo: "https://upload.wikimedia.org/wikipedia/commons/c/c3/Python-logo-notext.svg".to_string(),
            tags: vec!["programming language".to_string(), "scripting".to_string()],
        }
    }

    #[tokio::test]
    #[ignore]
    async fn test_pg_create_get_delete() {
        let store = store().await;
        let skill = python("pg-test-python");
        let _ = store.delete(&skill.key).await;

        assert_eq!(store.create(&skill).await.unwrap(), skill);
        assert!(matches!(store.create(&skill).await, Err(Error::Conflict(_))));
        assert_eq!(store.get(&skill.key).await.unwrap(), skill);

        store.delete(&skill.key).await.unwrap();
        assert!(matches!(store.get(&skill.key).await, Err(Error::NotFound(_))));
        assert!(matches!(store.delete(&skill.key).await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    #[ignore]
    async fn test_pg_update_field_keeps_tag_order() {
        let store = store().await;
        let skill = python("pg-test-tags");
        let _ = store.delete(&skill.key).await;
        store.create(&skill).await.unwrap();

        let tags = vec!["programming language".to_string(), "data".to_string(), "data".to_string()];
        let updated = store
            .update_field(&skill.key, SkillField::Tags(tags.clone()))
            .await
            .unwrap();
        assert_eq!(updated.tags, tags);
        assert_eq!(updated.name, skill.name);

        store.delete(&skill.key).await.unwrap();
        assert!(matches!(
            store.update_field(&skill.key, SkillField::Name("x".into())).await,
            Err(Error::NotFound(_))
        ));
    }
}
