//! HTTP Basic-auth extractor guarding the administrative routes.
//!
//! The dashboard, edit, delete, and upload handlers take [`Authenticated`]
//! as their first argument; requests without valid credentials are rejected
//! with 401 before the handler body runs.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use serde::Deserialize;

use quill_core::store::BlogStore;

use crate::{AppState, error::Error};

/// Credentials accepted as valid for this server instance.
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
  pub username:      String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
}

/// Zero-size marker: present in the handler means the request was
/// authenticated.
pub struct Authenticated;

/// Username and password recovered from an `Authorization: Basic …` header.
struct BasicCredentials {
  username: String,
  password: String,
}

impl BasicCredentials {
  /// Decode the request's Basic credentials. `None` if the header is
  /// absent, not Basic, not base64, or missing the `user:pass` separator.
  fn from_headers(headers: &HeaderMap) -> Option<Self> {
    let encoded = headers
      .get(axum::http::header::AUTHORIZATION)
      .and_then(|v| v.to_str().ok())?
      .strip_prefix("Basic ")?;

    let decoded = B64.decode(encoded).ok()?;
    let pair = String::from_utf8(decoded).ok()?;
    let (username, password) = pair.split_once(':')?;

    Some(Self {
      username: username.to_string(),
      password: password.to_string(),
    })
  }
}

/// Verify Basic credentials against the configured username and hash.
pub fn verify_auth(
  headers: &HeaderMap,
  config: &AuthConfig,
) -> Result<(), Error> {
  let creds =
    BasicCredentials::from_headers(headers).ok_or(Error::Unauthorized)?;

  if creds.username != config.username {
    return Err(Error::Unauthorized);
  }

  let parsed_hash = PasswordHash::new(&config.password_hash)
    .map_err(|_| Error::Unauthorized)?;

  Argon2::default()
    .verify_password(creds.password.as_bytes(), &parsed_hash)
    .map_err(|_| Error::Unauthorized)?;

  Ok(())
}

impl<S> FromRequestParts<AppState<S>> for Authenticated
where
  S: BlogStore + Clone + Send + Sync + 'static,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    verify_auth(&parts.headers, &state.auth)?;
    Ok(Authenticated)
  }
}

#[cfg(test)]
mod tests {
  use axum::http::{Request, header};
  use quill_core::memory::MemoryStore;

  use super::*;
  use crate::testing::test_state;

  async fn extract(
    req: Request<axum::body::Body>,
    state: &AppState<MemoryStore>,
  ) -> Result<Authenticated, Error> {
    let (mut parts, _) = req.into_parts();
    Authenticated::from_request_parts(&mut parts, state).await
  }

  fn basic(user: &str, pass: &str) -> String {
    let encoded = B64.encode(format!("{user}:{pass}"));
    format!("Basic {encoded}")
  }

  fn header_map(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, value.parse().unwrap());
    headers
  }

  #[test]
  fn credentials_decode_splits_on_the_first_colon() {
    let headers = header_map(&basic("admin", "pa:ss:word"));
    let creds = BasicCredentials::from_headers(&headers).unwrap();
    assert_eq!(creds.username, "admin");
    assert_eq!(creds.password, "pa:ss:word");
  }

  #[test]
  fn credentials_decode_rejects_non_basic_schemes() {
    let headers = header_map("Bearer some-token");
    assert!(BasicCredentials::from_headers(&headers).is_none());
  }

  #[test]
  fn credentials_decode_rejects_missing_separator() {
    let encoded = B64.encode("no-colon-here");
    let headers = header_map(&format!("Basic {encoded}"));
    assert!(BasicCredentials::from_headers(&headers).is_none());
  }

  #[tokio::test]
  async fn correct_credentials() {
    let (state, _dir) = test_state("secret");
    let req = Request::builder()
      .header(header::AUTHORIZATION, basic("admin", "secret"))
      .body(axum::body::Body::empty())
      .unwrap();
    assert!(extract(req, &state).await.is_ok());
  }

  #[tokio::test]
  async fn wrong_password() {
    let (state, _dir) = test_state("secret");
    let req = Request::builder()
      .header(header::AUTHORIZATION, basic("admin", "wrong"))
      .body(axum::body::Body::empty())
      .unwrap();
    assert!(matches!(extract(req, &state).await, Err(Error::Unauthorized)));
  }

  #[tokio::test]
  async fn missing_header() {
    let (state, _dir) = test_state("secret");
    let req = Request::builder().body(axum::body::Body::empty()).unwrap();
    assert!(matches!(extract(req, &state).await, Err(Error::Unauthorized)));
  }

  #[tokio::test]
  async fn invalid_base64() {
    let (state, _dir) = test_state("secret");
    let req = Request::builder()
      .header(header::AUTHORIZATION, "Basic !!!not-base64!!!")
      .body(axum::body::Body::empty())
      .unwrap();
    assert!(matches!(extract(req, &state).await, Err(Error::Unauthorized)));
  }
}
