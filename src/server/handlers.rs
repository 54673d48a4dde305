//! HTTP handlers for character operations
//!
//! Handlers stay thin: extract, call the service, shape the response.
//! Errors convert to HTTP responses through [`MaesterError`]'s
//! `IntoResponse`, so the status mapping lives in one place.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use crate::core::character::{Character, CharacterDraft, CharacterId, CharacterPage, CharacterPatch};
use crate::core::error::MaesterError;
use crate::core::service::CharacterService;

/// `GET /characters`
///
/// The raw query parameters go to the resolver untouched; unknown keys are
/// ignored there, invalid values come back as 400.
pub async fn list_characters(
    State(service): State<CharacterService>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<CharacterPage>, MaesterError> {
    let page = service.query(&params).await?;
    Ok(Json(page))
}

/// `GET /characters/{id}`
pub async fn get_character(
    State(service): State<CharacterService>,
    Path(id): Path<CharacterId>,
) -> Result<Json<Character>, MaesterError> {
    let character = service.get(id).await?;
    Ok(Json(character))
}

/// `POST /characters`
///
/// Every field of the draft is optional; the store assigns the identifier.
pub async fn create_character(
    State(service): State<CharacterService>,
    Json(draft): Json<CharacterDraft>,
) -> Result<(StatusCode, Json<Character>), MaesterError> {
    let character = service.create(draft).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// `PATCH /characters/{id}`
pub async fn update_character(
    State(service): State<CharacterService>,
    Path(id): Path<CharacterId>,
    Json(patch): Json<CharacterPatch>,
) -> Result<Json<Character>, MaesterError> {
    let character = service.update(id, patch).await?;
    Ok(Json(character))
}

/// `DELETE /characters/{id}`
pub async fn delete_character(
    State(service): State<CharacterService>,
    Path(id): Path<CharacterId>,
) -> Result<StatusCode, MaesterError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
