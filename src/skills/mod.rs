//! Skills module - the single domain entity and its storage interface
//!
//! A skill is a named competency (`key`, `name`, `description`, `logo`,
//! `tags`). Requests arrive as typed payloads, are turned into a [`Skill`]
//! or a [`SkillField`], and reach storage through [`SkillStore`].

mod traits;
mod types;

pub use traits::{SkillStore, SKILL_EXISTS, SKILL_NOT_FOUND};
pub use types::{
    DescriptionPayload, LogoPayload, NamePayload, NewSkill, Skill, SkillChanges, SkillField,
    TagsPayload,
};
