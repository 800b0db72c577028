//! Skill entity and request payloads

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// A stored skill
///
/// `key` identifies the skill and never changes after creation. `tags` keep
/// the order they were written in; duplicates are stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl Skill {
    /// Build a skill from a key and the mutable fields
    pub fn from_changes(key: impl Into<String>, changes: SkillChanges) -> Self {
        Skill {
            key: key.into(),
            name: changes.name,
            description: changes.description,
            logo: changes.logo,
            tags: changes.tags,
        }
    }

    /// Apply a single-field update in place
    pub fn apply(&mut self, field: SkillField) {
        match field {
            SkillField::Name(v) => self.name = v,
            SkillField::Description(v) => self.description = v,
            SkillField::Logo(v) => self.logo = v,
            SkillField::Tags(v) => self.tags = v,
        }
    }
}

/// Body of a create request
#[derive(Debug, Clone, Deserialize)]
pub struct NewSkill {
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl NewSkill {
    /// Check the key and turn the payload into a skill
    pub fn into_skill(self) -> Result<Skill> {
        if self.key.trim().is_empty() {
            return Err(Error::InvalidInput("Skill key must not be empty".to_string()));
        }

        Ok(Skill {
            key: self.key,
            name: self.name,
            description: self.description,
            logo: self.logo,
            tags: self.tags,
        })
    }
}

/// Body of a full replace request. A `key` in the body is accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillChanges {
    #[serde(default, rename = "key")]
    _key: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Body of `PATCH .../actions/name`
#[derive(Debug, Clone, Deserialize)]
pub struct NamePayload {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Body of `PATCH .../actions/description`. `null` clears the description.
#[derive(Debug, Clone, Deserialize)]
pub struct DescriptionPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// Body of `PATCH .../actions/logo`. `null` clears the logo.
#[derive(Debug, Clone, Deserialize)]
pub struct LogoPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub logo: String,
}

/// Body of `PATCH .../actions/tags`; the list replaces the old tags as given.
/// `null` clears them.
#[derive(Debug, Clone, Deserialize)]
pub struct TagsPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Read an explicit `null` as the type's default value. Absence is still
/// governed by the field's own `#[serde(default)]`.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One column of a skill, with its new value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillField {
    Name(String),
    Description(String),
    Logo(String),
    Tags(Vec<String>),
}

impl SkillField {
    /// Column this field is stored in
    pub fn column(&self) -> &'static str {
        match self {
            SkillField::Name(_) => "name",
            SkillField::Description(_) => "description",
            SkillField::Logo(_) => "logo",
            SkillField::Tags(_) => "tags",
        }
    }
}

impl From<NamePayload> for SkillField {
    fn from(p: NamePayload) -> Self {
        SkillField::Name(p.name)
    }
}

impl From<DescriptionPayload> for SkillField {
    fn from(p: DescriptionPayload) -> Self {
        SkillField::Description(p.description)
    }
}

impl From<LogoPayload> for SkillField {
    fn from(p: LogoPayload) -> Self {
        SkillField::Logo(p.logo)
    }
}

impl From<TagsPayload> for SkillField {
    fn from(p: TagsPayload) -> Self {
        SkillField::Tags(p.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_skill_defaults() {
        let new: NewSkill = serde_json::from_str(r#"{"key":"rust"}"#).unwrap();
        let skill = new.into_skill().unwrap();
        assert_eq!(skill.key, "rust");
        assert_eq!(skill.name, "");
        assert!(skill.tags.is_empty());
    }

    #[test]
    fn test_new_skill_requires_key() {
        assert!(serde_json::from_str::<NewSkill>(r#"{"name":"Rust"}"#).is_err());

        let blank: NewSkill = serde_json::from_str(r#"{"key":"  "}"#).unwrap();
        assert!(matches!(blank.into_skill(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_changes_ignore_key() {
        let changes: SkillChanges =
            serde_json::from_str(r#"{"key":"other","name":"Python 3","tags":["data"]}"#).unwrap();
        let skill = Skill::from_changes("python", changes);
        assert_eq!(skill.key, "python");
        assert_eq!(skill.name, "Python 3");
        assert_eq!(skill.tags, vec!["data"]);
    }

    #[test]
    fn test_patch_payload_requires_field() {
        assert!(serde_json::from_str::<NamePayload>("{}").is_err());
        assert!(serde_json::from_str::<TagsPayload>(r#"{"tags":"data"}"#).is_err());
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let new: NewSkill =
            serde_json::from_str(r#"{"key":"rust","description":null,"tags":null}"#).unwrap();
        let skill = new.into_skill().unwrap();
        assert_eq!(skill.description, "");
        assert!(skill.tags.is_empty());

        let changes: SkillChanges =
            serde_json::from_str(r#"{"name":"Rust","logo":null}"#).unwrap();
        assert_eq!(changes.logo, "");

        let tags: TagsPayload = serde_json::from_str(r#"{"tags":null}"#).unwrap();
        assert!(tags.tags.is_empty());

        // null clears a field, but the field itself must be present
        assert!(serde_json::from_str::<DescriptionPayload>("{}").is_err());
        assert!(serde_json::from_str::<NewSkill>(r#"{"key":null}"#).is_err());
    }

    #[test]
    fn test_apply_touches_one_field() {
        let mut skill = Skill {
            key: "python".into(),
            name: "Python".into(),
            description: "desc".into(),
            logo: "logo.svg".into(),
            tags: vec!["scripting".into()],
        };
        skill.apply(SkillField::Logo("new.svg".into()));
        assert_eq!(skill.logo, "new.svg");
        assert_eq!(skill.name, "Python");
        assert_eq!(skill.description, "desc");
        assert_eq!(skill.tags, vec!["scripting"]);
    }

    #[test]
    fn test_skill_json_shape() {
        let skill = Skill {
            key: "go".into(),
            name: "Go".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&skill).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"key":"go","name":"Go","description":"","logo":"","tags":[]})
        );
    }
}
