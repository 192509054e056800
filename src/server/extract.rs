//! Request body extraction

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::models::ErrorResponse;

/// JSON body that tolerates a missing `Content-Type`
///
/// Bodies sent without a content type are parsed as JSON. A non-JSON
/// content type, malformed JSON or a schema mismatch is rejected with
/// `422` and a `{"detail": ...}` body.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

/// Rejection for [`JsonBody`]
#[derive(Debug)]
pub struct BodyRejection(String);

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        let body = ErrorResponse { detail: self.0 };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

fn is_json_content_type(value: &str) -> bool {
    let mime = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().map(is_json_content_type).unwrap_or(false));

        if content_type == Some(false) {
            return Err(BodyRejection("Request body must be JSON".to_string()).into_response());
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| BodyRejection(format!("Invalid request body: {}", e)).into_response())
    }
}
