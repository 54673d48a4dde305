//! Router assembly

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use super::handlers;
use crate::core::service::CharacterService;

/// Build the application router
///
/// Health routes carry no state; the character routes share one
/// [`CharacterService`].
pub fn build_router(service: CharacterService) -> Router {
    let character_routes = Router::new()
        .route(
            "/characters",
            get(handlers::list_characters).post(handlers::create_character),
        )
        .route(
            "/characters/{id}",
            get(handlers::get_character)
                .patch(handlers::update_character)
                .delete(handlers::delete_character),
        )
        .with_state(service);

    health_routes().merge(character_routes)
}

/// Build health check routes
fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "maester"
    }))
}
