//! HTTP layer for the Quill blog engine.
//!
//! Exposes an axum [`Router`] backed by any [`BlogStore`]: public listing
//! and reading, contact submission, and Basic-auth-gated administration
//! (dashboard, edit, delete, upload).

pub mod auth;
pub mod error;
pub mod handlers;
pub mod notify;
pub mod templates;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use quill_core::store::BlogStore;

use auth::AuthConfig;
use notify::{ContactNotifier, MailConfig};
use templates::Templates;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Site-display parameters injected into every rendered page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteParams {
  pub name:          String,
  pub tagline:       String,
  pub about:         String,
  pub contact_email: String,
}

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Clone, Deserialize)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub mongo_uri:  String,
  pub mongo_db:   String,
  pub upload_dir: PathBuf,
  pub site:       SiteParams,
  pub auth:       AuthConfig,
  #[serde(default)]
  pub mail:       MailConfig,
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers. Built once at startup;
/// nothing else is shared between requests.
#[derive(Clone)]
pub struct AppState<S: BlogStore> {
  pub store:     Arc<S>,
  pub config:    Arc<ServerConfig>,
  pub auth:      Arc<AuthConfig>,
  pub templates: Arc<Templates>,
  /// `None` when mail notification is disabled by configuration.
  pub mailer:    Option<Arc<dyn ContactNotifier>>,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the blog server.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: BlogStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(handlers::public::home::<S>))
    .route("/post/{slug}", get(handlers::public::post_detail::<S>))
    .route("/about", get(handlers::public::about::<S>))
    .route("/contact", post(handlers::contact::submit::<S>))
    .route("/uploader", post(handlers::upload::upload::<S>))
    .route("/dashboard", get(handlers::admin::dashboard::<S>))
    .route(
      "/edit/{id}",
      get(handlers::admin::edit_form::<S>).post(handlers::admin::edit::<S>),
    )
    .route("/delete/{id}", post(handlers::admin::delete::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

#[cfg(test)]
pub(crate) mod testing;

// ─── Integration tests ───────────────────────────────────────────────────────
