//! Skill request handlers
//!
//! Each handler parses the path and body, makes one store call and wraps
//! the outcome in the response envelope.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use super::envelope::Envelope;
use super::error::ApiError;
use super::AppState;
use crate::skills::{NewSkill, Skill, SkillChanges, SkillField};

type ApiResult<T> = Result<Json<Envelope<T>>, ApiError>;

/// Message returned after a successful delete
pub const SKILL_DELETED: &str = "Skill deleted";

pub async fn list_skills(State(state): State<AppState>) -> ApiResult<Vec<Skill>> {
    let skills = state.store.list().await?;
    Ok(Json(Envelope::data(skills)))
}

pub async fn get_skill(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<Skill> {
    let skill = state.store.get(&key).await?;
    Ok(Json(Envelope::data(skill)))
}

pub async fn create_skill(
    State(state): State<AppState>,
    payload: Result<Json<NewSkill>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Skill>>), ApiError> {
    let Json(new_skill) = payload?;
    let skill = new_skill.into_skill()?;

    let created = state.store.create(&skill).await?;
    debug!("Created skill '{}'", created.key);

    Ok((StatusCode::CREATED, Json(Envelope::data(created))))
}

pub async fn replace_skill(
    State(state): State<AppState>,
    Path(key): Path<String>,
    payload: Result<Json<SkillChanges>, JsonRejection>,
) -> ApiResult<Skill> {
    let Json(changes) = payload?;
    let skill = Skill::from_changes(key, changes);

    let updated = state.store.replace(&skill).await?;
    debug!("Replaced skill '{}'", updated.key);

    Ok(Json(Envelope::data(updated)))
}

/// Single-field update; `P` is the payload naming the field
pub async fn update_skill_field<P>(
    State(state): State<AppState>,
    Path(key): Path<String>,
    payload: Result<Json<P>, JsonRejection>,
) -> ApiResult<Skill>
where
    P: DeserializeOwned + Into<SkillField> + Send + 'static,
{
    let Json(payload) = payload?;
    let field: SkillField = payload.into();
    debug!("Updating {} of skill '{}'", field.column(), key);

    let updated = state.store.update_field(&key, field).await?;
    Ok(Json(Envelope::data(updated)))
}

pub async fn delete_skill(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<()> {
    state.store.delete(&key).await?;
    debug!("Deleted skill '{}'", key);
    Ok(Json(Envelope::message(SKILL_DELETED)))
}

pub async fn health(State(state): State<AppState>) -> ApiResult<serde_json::Value> {
    state.store.ping().await?;
    Ok(Json(Envelope::data(json!({ "storage": "ok" }))))
}

pub async fn route_not_found() -> (StatusCode, Json<Envelope<()>>) {
    (StatusCode::NOT_FOUND, Json(Envelope::error("Route not found")))
}

pub async fn method_not_allowed() -> (StatusCode, Json<Envelope<()>>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(Envelope::error("Method not allowed")),
    )
}
