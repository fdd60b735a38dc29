//! HTTP vocabulary shared by route descriptors and the dispatch layer.
//!
//! This crate is the only one in the workspace that depends on `axum` and
//! `http` directly. Everything else talks in terms of [`RequestMethod`],
//! [`MediaType`], [`Consumer`] and [`ErrorResponse`].

pub mod consumer;
pub mod error_response;
pub mod media;
pub mod method;

pub use http::{Request, StatusCode};
pub use axum::response::{IntoResponse, Response};
pub use bytes::Bytes;

pub use consumer::{ConsumeError, Consumer, JsonConsumer};
pub use error_response::{ErrorResponse, ErrorResponseImpl};
pub use media::MediaType;
pub use method::{RequestMethod, UnsupportedMethod};
