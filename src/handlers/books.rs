//! Book handlers: create, delete, get by id, list.

use crate::error::{AppError, StoreError};
use crate::model::NewBook;
use crate::response::{message, ok_with_data};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Path id as received. Missing or empty is `EmptyId`; an id segment that
/// cannot be decoded fails the same way as an id the database rejects.
fn require_id(
    id: Result<Path<String>, PathRejection>,
    on_invalid: fn(StoreError) -> AppError,
) -> Result<String, AppError> {
    match id {
        Ok(Path(id)) if !id.is_empty() => Ok(id),
        Ok(_) | Err(PathRejection::MissingPathParams(_)) => Err(AppError::EmptyId),
        Err(e) => Err(on_invalid(StoreError::InvalidId(e.to_string()))),
    }
}

fn parse_id(id_str: &str) -> Result<i64, StoreError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| StoreError::InvalidId(id_str.to_string()))
}

pub async fn create_book(
    State(state): State<AppState>,
    body: Result<Json<NewBook>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(book) = body.map_err(AppError::InvalidBody)?;
    let created = state.store.create(&book).await.map_err(AppError::Create)?;
    tracing::info!(id = created.id, "book created");
    Ok(message(StatusCode::OK, "book has been created"))
}

pub async fn delete_book(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id_str = require_id(id, AppError::Delete)?;
    let id = parse_id(&id_str).map_err(AppError::Delete)?;
    let removed = state.store.delete(id).await.map_err(AppError::Delete)?;
    if removed == 0 {
        tracing::debug!(id, "delete matched no rows");
    }
    Ok(message(StatusCode::OK, "book deleted successfully"))
}

pub async fn get_book_by_id(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id_str = require_id(id, AppError::Get)?;
    tracing::debug!(id = %id_str, "get book");
    let id = parse_id(&id_str).map_err(AppError::Get)?;
    let book = state.store.get(id).await.map_err(AppError::Get)?;
    Ok(ok_with_data("book id has been found", book))
}

pub async fn get_books(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let books = state.store.list().await.map_err(AppError::List)?;
    Ok(ok_with_data("book has been found", books))
}
