//! Book routes, nested under `/api` by [`crate::routes::app`].
//! The trailing-slash variants carry no id so an empty id reaches the handler.

use crate::handlers::books::{create_book, delete_book, get_book_by_id, get_books};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/create_books", post(create_book))
        .route("/delete_book/:id", delete(delete_book))
        .route("/delete_book/", delete(delete_book))
        .route("/get_books/:id", get(get_book_by_id))
        .route("/get_books/", get(get_book_by_id))
        .route("/books", get(get_books))
        .with_state(state)
}
