//! Shared fixtures for the in-crate tests.

use std::{
  path::{Path, PathBuf},
  sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
  },
};

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use rand_core::OsRng;
use uuid::Uuid;

use quill_core::{contact::Contact, memory::MemoryStore};

use crate::{
  AppState, ServerConfig, SiteParams,
  auth::AuthConfig,
  notify::{ContactNotifier, MailConfig, MailError},
  templates::Templates,
};

/// A per-test upload directory, removed on drop.
pub struct TempUploadDir(PathBuf);

impl TempUploadDir {
  fn new() -> Self {
    let path = std::env::temp_dir()
      .join("quill-test")
      .join(Uuid::new_v4().simple().to_string());
    std::fs::create_dir_all(&path).expect("create temp upload dir");
    Self(path)
  }

  pub fn path(&self) -> &Path {
    &self.0
  }
}

impl Drop for TempUploadDir {
  fn drop(&mut self) {
    let _ = std::fs::remove_dir_all(&self.0);
  }
}

/// Application state over a fresh [`MemoryStore`], with Basic auth set to
/// `admin` and the given password, and mail notification disabled.
pub fn test_state(password: &str) -> (AppState<MemoryStore>, TempUploadDir) {
  let dir = TempUploadDir::new();
  let salt = SaltString::generate(&mut OsRng);
  let hash = Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .expect("hash test password")
    .to_string();

  let auth = AuthConfig {
    username:      "admin".to_string(),
    password_hash: hash,
  };

  let config = ServerConfig {
    host:       "127.0.0.1".to_string(),
    port:       8000,
    mongo_uri:  "mongodb://localhost:27017".to_string(),
    mongo_db:   "quill-test".to_string(),
    upload_dir: dir.path().to_path_buf(),
    site:       SiteParams {
      name:          "Test Blog".to_string(),
      tagline:       "Writing about tests".to_string(),
      about:         "A place for tests.".to_string(),
      contact_email: "owner@example.com".to_string(),
    },
    auth:       auth.clone(),
    mail:       MailConfig::default(),
  };

  let state = AppState {
    store:     Arc::new(MemoryStore::new()),
    config:    Arc::new(config),
    auth:      Arc::new(auth),
    templates: Arc::new(Templates::new()),
    mailer:    None,
  };

  (state, dir)
}

pub fn auth_header(user: &str, pass: &str) -> String {
  format!("Basic {}", B64.encode(format!("{user}:{pass}")))
}

/// A notifier whose every delivery fails, recording how often it was asked.
#[derive(Default)]
pub struct FailingNotifier {
  pub calls: AtomicUsize,
}

#[async_trait]
impl ContactNotifier for FailingNotifier {
  async fn notify_contact(&self, _contact: &Contact) -> Result<(), MailError> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    let err = "no-at-sign"
      .parse::<lettre::message::Mailbox>()
      .expect_err("address must not parse");
    Err(MailError::Address(err))
  }
}
