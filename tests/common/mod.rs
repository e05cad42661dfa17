#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use books_api::{app, AppState, Book, BookStore, HttpConfig, NewBook, StoreError};
use http_body_util::BodyExt;
use std::sync::Mutex;
use tower::ServiceExt;

/// In-process store with the same contract as the PostgreSQL one.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<(i64, Vec<Book>)>,
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn create(&self, book: &NewBook) -> Result<Book, StoreError> {
        let mut guard = self.inner.lock().unwrap();
        guard.0 += 1;
        let now = chrono::Utc::now();
        let row = Book {
            id: guard.0,
            author: Some(book.author.clone()),
            title: Some(book.title.clone()),
            publisher: Some(book.publisher.clone()),
            created_at: now,
            updated_at: now,
        };
        guard.1.push(row.clone());
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let mut guard = self.inner.lock().unwrap();
        let before = guard.1.len();
        guard.1.retain(|b| b.id != id);
        Ok((before - guard.1.len()) as u64)
    }

    async fn get(&self, id: i64) -> Result<Book, StoreError> {
        let guard = self.inner.lock().unwrap();
        guard.1.iter().find(|b| b.id == id).cloned().ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.inner.lock().unwrap().1.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Every call fails as if the database were gone.
pub struct FailingStore;

#[async_trait]
impl BookStore for FailingStore {
    async fn create(&self, _book: &NewBook) -> Result<Book, StoreError> {
        Err(StoreError::Db(sqlx::Error::PoolClosed))
    }

    async fn delete(&self, _id: i64) -> Result<u64, StoreError> {
        Err(StoreError::Db(sqlx::Error::PoolClosed))
    }

    async fn get(&self, _id: i64) -> Result<Book, StoreError> {
        Err(StoreError::Db(sqlx::Error::PoolClosed))
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        Err(StoreError::Db(sqlx::Error::PoolClosed))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Db(sqlx::Error::PoolClosed))
    }
}

pub fn router<S: BookStore + 'static>(store: S) -> axum::Router {
    app(AppState::new(store), &HttpConfig::default())
}

pub async fn send(
    router: axum::Router,
    method: &str,
    path: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(path);
    let body = match body {
        Some(b) => {
            builder = builder.header("content-type", "application/json");
            Body::from(b.to_string())
        }
        None => Body::empty(),
    };
    let resp = router.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
