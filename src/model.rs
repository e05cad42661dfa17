//! Book record and create payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the `books` table.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub author: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/create_books`. Missing fields decode as empty strings;
/// any `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewBook {
    pub author: String,
    pub title: String,
    pub publisher: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_book_ignores_id_and_defaults_missing_fields() {
        let b: NewBook = serde_json::from_str(r#"{"id": 9, "author": "A"}"#).unwrap();
        assert_eq!(
            b,
            NewBook {
                author: "A".into(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn new_book_rejects_wrong_field_types() {
        assert!(serde_json::from_str::<NewBook>(r#"{"author": 1}"#).is_err());
        assert!(serde_json::from_str::<NewBook>(r#""just a string""#).is_err());
    }
}
