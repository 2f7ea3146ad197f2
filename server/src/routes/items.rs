//! Item CRUD handlers, scoped to the caller's session
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use pantry_core::Item;

use crate::error::ApiError;
use crate::session::CurrentSession;
use crate::state::AppState;

/// Response body for GET /items
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemList {
    pub items: Vec<Item>,
    pub session_id: String,
}

/// Request body for POST /items and PUT /items/{id}
#[derive(Debug, Default, Deserialize)]
pub struct NameRequest {
    pub name: Option<String>,
}

/// A missing or unreadable body counts as an absent name.
fn requested_name(body: Result<Json<NameRequest>, JsonRejection>) -> Option<String> {
    match body {
        Ok(Json(body)) => body.name,
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable item body");
            None
        }
    }
}

pub async fn list_items(
    State(state): State<AppState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
) -> Json<ItemList> {
    let items = state.pantry().list_items(&session);

    Json(ItemList {
        items,
        session_id: session.id.clone(),
    })
}

pub async fn create_item(
    State(state): State<AppState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
    body: Result<Json<NameRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = state
        .pantry()
        .create_item(&session, requested_name(body))?;

    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(state): State<AppState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
    Path(id): Path<String>,
    body: Result<Json<NameRequest>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let item = state
        .pantry()
        .update_item(&session, &id, requested_name(body))?;

    Ok(Json(item))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.pantry().delete_item(&session, &id)?;

    Ok(StatusCode::NO_CONTENT)
}
