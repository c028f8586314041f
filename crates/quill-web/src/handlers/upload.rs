//! Image upload into the configured upload directory.

use axum::{
  Json,
  extract::{Multipart, State},
};
use serde_json::{Value, json};

use quill_core::store::BlogStore;

use crate::{AppState, auth::Authenticated, error::Error};

/// Extensions accepted for upload. Everything else is rejected.
const ALLOWED_EXTENSIONS: &[&str] =
  &["png", "jpg", "jpeg", "gif", "webp", "svg"];

/// Validate a client-supplied filename.
///
/// The name must be a bare path component: no separators, no parent
/// references, and an allow-listed extension. Anything else is rejected so
/// a hostile name cannot write outside the upload directory.
fn validate_filename(name: &str) -> Result<(), Error> {
  if name.is_empty() {
    return Err(Error::BadRequest("filename is empty".to_string()));
  }
  if name.contains('/') || name.contains('\\') || name.contains("..") {
    return Err(Error::BadRequest(format!(
      "filename {name:?} contains path components"
    )));
  }

  let extension = name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase());
  match extension {
    Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
    _ => Err(Error::BadRequest(format!(
      "filename {name:?} does not have an allowed image extension"
    ))),
  }
}

/// `POST /uploader`
///
/// Accepts one multipart field named `file` and writes its bytes under the
/// upload directory, overwriting any existing file of the same name.
pub async fn upload<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  mut multipart: Multipart,
) -> Result<Json<Value>, Error>
where
  S: BlogStore + Clone + Send + Sync + 'static,
{
  while let Some(field) = multipart
    .next_field()
    .await
    .map_err(|e| Error::BadRequest(format!("malformed multipart body: {e}")))?
  {
    if field.name() != Some("file") {
      continue;
    }

    let filename = field
      .file_name()
      .ok_or_else(|| Error::BadRequest("file field has no filename".to_string()))?
      .to_string();
    validate_filename(&filename)?;

    let bytes = field
      .bytes()
      .await
      .map_err(|e| Error::BadRequest(format!("failed to read upload: {e}")))?;

    tokio::fs::create_dir_all(&state.config.upload_dir).await?;
    let destination = state.config.upload_dir.join(&filename);
    tokio::fs::write(&destination, &bytes).await?;

    tracing::info!(file = %filename, bytes = bytes.len(), "file uploaded");
    return Ok(Json(json!({
      "info": format!("File '{filename}' uploaded successfully")
    })));
  }

  Err(Error::BadRequest("multipart field 'file' is missing".to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bare_image_names_pass() {
    assert!(validate_filename("photo.png").is_ok());
    assert!(validate_filename("Header.JPG").is_ok());
    assert!(validate_filename("diagram.svg").is_ok());
  }

  #[test]
  fn traversal_names_are_rejected() {
    assert!(validate_filename("../../evil.sh").is_err());
    assert!(validate_filename("..\\evil.png").is_err());
    assert!(validate_filename("dir/photo.png").is_err());
    assert!(validate_filename("photo..png").is_err());
  }

  #[test]
  fn non_image_extensions_are_rejected() {
    assert!(validate_filename("script.sh").is_err());
    assert!(validate_filename("page.html").is_err());
    assert!(validate_filename("noextension").is_err());
    assert!(validate_filename("").is_err());
  }
}
