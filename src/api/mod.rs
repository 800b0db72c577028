//! HTTP API - routes for the skill resource
//!
//! All routes live under `/api/v1`. Request logging and panic recovery
//! are tower-http layers applied to the whole router. Unknown paths, wrong
//! methods and panics still answer with the error envelope.

mod envelope;
mod error;
mod handlers;

pub use envelope::{Envelope, Status};
pub use error::ApiError;
pub use handlers::SKILL_DELETED;

use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::skills::{DescriptionPayload, LogoPayload, NamePayload, SkillStore, TagsPayload};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SkillStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn SkillStore>) -> Self {
        Self { store }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/skills", get(handlers::list_skills).post(handlers::create_skill))
        .route("/skills/", get(handlers::list_skills).post(handlers::create_skill))
        .route(
            "/skills/{key}",
            get(handlers::get_skill)
                .put(handlers::replace_skill)
                .delete(handlers::delete_skill),
        )
        .route(
            "/skills/{key}/actions/name",
            patch(handlers::update_skill_field::<NamePayload>),
        )
        .route(
            "/skills/{key}/actions/description",
            patch(handlers::update_skill_field::<DescriptionPayload>),
        )
        .route(
            "/skills/{key}/actions/logo",
            patch(handlers::update_skill_field::<LogoPayload>),
        )
        .route(
            "/skills/{key}/actions/tags",
            patch(handlers::update_skill_field::<TagsPayload>),
        )
        .method_not_allowed_fallback(handlers::method_not_allowed);

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/v1", api)
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
}
