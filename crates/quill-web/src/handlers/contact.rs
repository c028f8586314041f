//! Contact-form submission.

use axum::{
  Json,
  extract::{Form, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use quill_core::{contact::ContactMessage, store::BlogStore};

use crate::{AppState, error::Error, notify::ContactNotifier as _};

#[derive(Debug, Deserialize)]
pub struct ContactForm {
  pub name:    String,
  pub email:   String,
  pub phone:   String,
  pub message: String,
}

/// `POST /contact`
///
/// The document is committed before notification is attempted, so a mail
/// failure never loses the message and never fails the request.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<ContactForm>,
) -> Result<Json<Value>, Error>
where
  S: BlogStore + Clone + Send + Sync + 'static,
{
  for (field, value) in [
    ("name", &form.name),
    ("email", &form.email),
    ("phone", &form.phone),
    ("message", &form.message),
  ] {
    if value.trim().is_empty() {
      return Err(Error::BadRequest(format!("field {field:?} is required")));
    }
  }

  let contact = state
    .store
    .add_contact(ContactMessage {
      name:    form.name,
      email:   form.email,
      phone:   form.phone,
      message: form.message,
    })
    .await?;

  match &state.mailer {
    Some(mailer) => {
      if let Err(e) = mailer.notify_contact(&contact).await {
        tracing::warn!(error = %e, "contact notification failed");
      }
    }
    None => {
      tracing::debug!("mail notification disabled; contact stored only");
    }
  }

  Ok(Json(json!({ "message": "Message sent" })))
}
