use http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use waypoint_http::{ConsumeError, ErrorResponse, ErrorResponseImpl};

async fn response_parts(resp: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[test]
fn error_response_accessors() {
    let resp = ErrorResponseImpl::new(StatusCode::NOT_FOUND, serde_json::json!({"id": 7}));
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(resp.content()["id"], 7);
}

#[test]
fn error_response_display() {
    let resp = ErrorResponseImpl::new(StatusCode::BAD_REQUEST, "bad");
    assert_eq!(
        resp.to_string(),
        "ErrorResponseImpl[statusCode=400, content=\"bad\"]"
    );
}

#[tokio::test]
async fn error_response_into_response() {
    let resp = ErrorResponseImpl::new(StatusCode::CONFLICT, serde_json::json!({"error": "taken"}));
    let (status, body) = response_parts(resp.into_response()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "taken");
}

#[tokio::test]
async fn consume_error_into_response() {
    let err = ConsumeError::UnsupportedMediaType {
        expected: "application/json".into(),
        found: "text/plain".into(),
    };
    let (status, body) = response_parts(err.into_response()).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(
        body["error"],
        "Unsupported media type 'text/plain', expected 'application/json'"
    );
}
