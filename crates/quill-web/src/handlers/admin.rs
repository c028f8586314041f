//! Administrative handlers: dashboard listing, post edit/create, delete.
//!
//! Every handler here takes [`Authenticated`] first, so requests without
//! valid credentials are rejected before any store access.

use axum::{
  extract::{Form, Path, State},
  response::{Html, Redirect},
};
use minijinja::context;
use serde::Deserialize;

use quill_core::{
  post::{NEW_POST_SENTINEL, PostDraft},
  store::BlogStore,
};

use crate::{
  AppState, auth::Authenticated, error::Error, handlers::POST_FETCH_LIMIT,
};

/// `GET /dashboard`
pub async fn dashboard<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
) -> Result<Html<String>, Error>
where
  S: BlogStore + Clone + Send + Sync + 'static,
{
  let posts = state.store.list_posts(POST_FETCH_LIMIT).await?;
  let html = state.templates.render(
    "dashboard.html",
    context! { params => &state.config.site, posts },
  )?;
  Ok(Html(html))
}

/// `GET /edit/{id}` — blank form for the `"0"` sentinel, prefilled
/// otherwise. An id that matches nothing still renders a blank form so the
/// redirect after a delete race stays harmless.
pub async fn edit_form<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Html<String>, Error>
where
  S: BlogStore + Clone + Send + Sync + 'static,
{
  let post = if id == NEW_POST_SENTINEL {
    None
  } else {
    state.store.find_post_by_id(&id).await?
  };

  let html = state.templates.render(
    "edit.html",
    context! { params => &state.config.site, post_id => id, post },
  )?;
  Ok(Html(html))
}

#[derive(Debug, Deserialize)]
pub struct EditForm {
  pub title:    String,
  pub tagline:  String,
  pub slug:     String,
  pub content:  String,
  pub img_file: String,
}

fn blank_to_none(value: String) -> Option<String> {
  if value.trim().is_empty() { None } else { Some(value) }
}

/// `POST /edit/{id}`
///
/// The `"0"` sentinel creates; the redirect then carries the new record's
/// real id. Any other id is a full replace — a valid id matching nothing is
/// a silent no-op, a malformed one is a 400.
pub async fn edit<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
  Form(form): Form<EditForm>,
) -> Result<Redirect, Error>
where
  S: BlogStore + Clone + Send + Sync + 'static,
{
  let draft = PostDraft {
    title:    form.title,
    slug:     form.slug,
    content:  form.content,
    tagline:  blank_to_none(form.tagline),
    img_file: blank_to_none(form.img_file),
  };

  let target = if id == NEW_POST_SENTINEL {
    let post = state.store.insert_post(draft).await?;
    tracing::info!(id = %post.id, slug = %post.slug, "post created");
    post.id
  } else {
    state.store.replace_post(&id, draft).await?;
    id
  };

  Ok(Redirect::to(&format!("/edit/{target}")))
}

/// `POST /delete/{id}`
pub async fn delete<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Redirect, Error>
where
  S: BlogStore + Clone + Send + Sync + 'static,
{
  state.store.delete_post(&id).await?;
  tracing::info!(%id, "post deleted");
  Ok(Redirect::to("/dashboard"))
}
