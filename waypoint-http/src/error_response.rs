use std::fmt;

use http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// The value an error route hands back to the transport layer.
pub trait ErrorResponse {
    fn status_code(&self) -> StatusCode;

    fn content(&self) -> &serde_json::Value;
}

/// Plain [`ErrorResponse`] carrying a status code and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponseImpl {
    status_code: StatusCode,
    content: serde_json::Value,
}

impl ErrorResponseImpl {
    pub fn new(status_code: StatusCode, content: impl Into<serde_json::Value>) -> Self {
        Self {
            status_code,
            content: content.into(),
        }
    }
}

impl ErrorResponse for ErrorResponseImpl {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn content(&self) -> &serde_json::Value {
        &self.content
    }
}

impl fmt::Display for ErrorResponseImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ErrorResponseImpl[statusCode={}, content={}]",
            self.status_code.as_u16(),
            self.content
        )
    }
}

impl IntoResponse for ErrorResponseImpl {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.content)).into_response()
    }
}
