//! Error types and axum `IntoResponse` implementation.

use axum::{
  Json,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by a web handler.
#[derive(Debug, Error)]
pub enum Error {
  #[error("unauthorized")]
  Unauthorized,

  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("template error: {0}")]
  Template(#[from] minijinja::Error),

  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<quill_core::Error> for Error {
  fn from(e: quill_core::Error) -> Self {
    match e {
      quill_core::Error::InvalidId(id) => {
        Error::BadRequest(format!("invalid post id: {id:?}"))
      }
      e @ quill_core::Error::Unavailable(_) => Error::Store(Box::new(e)),
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      Error::Unauthorized => {
        (StatusCode::UNAUTHORIZED, "unauthorized".to_string())
      }
      Error::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      Error::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      Error::Template(e) => {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
      Error::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
      Error::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };

    let mut res =
      (status, Json(json!({ "error": message }))).into_response();
    if matches!(self, Error::Unauthorized) {
      res.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static("Basic realm=\"quill\""),
      );
    }
    res
  }
}
