//! Error types for `quill-core`.

use thiserror::Error;

/// Failures a [`BlogStore`](crate::store::BlogStore) operation can report.
///
/// Read-path misses are not errors — lookups return `Ok(None)` and the
/// caller decides how to surface them. Write-path misses (replace or delete
/// of an id that matches nothing) are silent no-ops by contract.
#[derive(Debug, Error)]
pub enum Error {
  /// The supplied id token is not a valid identity for the backend.
  #[error("invalid post id: {0:?}")]
  InvalidId(String),

  /// The backend could not be reached or the driver failed.
  #[error("store unavailable: {0}")]
  Unavailable(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
