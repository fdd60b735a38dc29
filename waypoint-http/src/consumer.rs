use std::fmt;

use http::header::CONTENT_TYPE;
use http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Error raised while turning a request body into a value.
#[derive(Debug)]
pub enum ConsumeError {
    /// The request declares a content type this consumer does not handle.
    UnsupportedMediaType { expected: String, found: String },
    /// The body could not be parsed or did not match the target type.
    Malformed(String),
}

impl fmt::Display for ConsumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsumeError::UnsupportedMediaType { expected, found } => {
                write!(f, "Unsupported media type '{found}', expected '{expected}'")
            }
            ConsumeError::Malformed(msg) => write!(f, "Malformed request body: {msg}"),
        }
    }
}

impl std::error::Error for ConsumeError {}

impl IntoResponse for ConsumeError {
    fn into_response(self) -> Response {
        let status = match &self {
            ConsumeError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ConsumeError::Malformed(_) => StatusCode::BAD_REQUEST,
        };
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Unmarshals an HTTP request body.
///
/// A dispatcher picks the consumer whose [`media_type`](Consumer::media_type)
/// matches one of the route's `consumes` entries.
pub trait Consumer: Send + Sync {
    /// The media type this consumer can handle.
    fn media_type(&self) -> &str;

    /// Parse the request body into an untyped JSON value.
    fn unmarshal_value(&self, request: &Request<Bytes>) -> Result<serde_json::Value, ConsumeError>;

    /// Parse the request body into `T`.
    fn unmarshal<T: DeserializeOwned>(&self, request: &Request<Bytes>) -> Result<T, ConsumeError>
    where
        Self: Sized,
    {
        let value = self.unmarshal_value(request)?;
        serde_json::from_value(value).map_err(|e| ConsumeError::Malformed(e.to_string()))
    }
}

/// Consumer for `application/json` bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConsumer;

impl Consumer for JsonConsumer {
    fn media_type(&self) -> &str {
        "application/json"
    }

    fn unmarshal_value(&self, request: &Request<Bytes>) -> Result<serde_json::Value, ConsumeError> {
        if let Some(content_type) = request.headers().get(CONTENT_TYPE) {
            let found = content_type.to_str().unwrap_or_default();
            // Parameters such as `; charset=utf-8` are ignored.
            let essence = found.split(';').next().unwrap_or_default().trim();
            if !essence.eq_ignore_ascii_case(self.media_type()) {
                return Err(ConsumeError::UnsupportedMediaType {
                    expected: self.media_type().to_string(),
                    found: found.to_string(),
                });
            }
        }
        serde_json::from_slice(request.body()).map_err(|e| ConsumeError::Malformed(e.to_string()))
    }
}
