//! Books API: HTTP CRUD service over a PostgreSQL `books` table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{Config, DatabaseConfig, HttpConfig};
pub use error::{AppError, ConfigError, StoreError};
pub use migration::migrate_books;
pub use model::{Book, NewBook};
pub use routes::{app, book_routes, common_routes};
pub use state::AppState;
pub use store::{connect, BookStore, PgBookStore};
