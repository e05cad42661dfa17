//! Response envelope: `{"message": ..., "data": ...}`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Envelope<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Message-only body, used for writes and every failure.
pub fn message(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Envelope<()>>) {
    (
        status,
        Json(Envelope {
            message: message.into(),
            data: None,
        }),
    )
}

pub fn ok_with_data<T: Serialize>(message: impl Into<String>, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            message: message.into(),
            data: Some(data),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_is_omitted_when_absent() {
        let (status, Json(body)) = message(StatusCode::OK, "book has been created");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "message": "book has been created" })
        );
    }

    #[test]
    fn data_is_serialized_when_present() {
        let (_, Json(body)) = ok_with_data("book has been found", vec![1, 2]);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "message": "book has been found", "data": [1, 2] })
        );
    }
}
