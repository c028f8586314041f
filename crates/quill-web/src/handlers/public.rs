//! Public read-only pages: home listing, post detail, about.

use axum::{
  extract::{Path, State},
  response::Html,
};
use minijinja::context;

use quill_core::store::BlogStore;

use crate::{AppState, error::Error, handlers::POST_FETCH_LIMIT};

/// `GET /`
pub async fn home<S>(
  State(state): State<AppState<S>>,
) -> Result<Html<String>, Error>
where
  S: BlogStore + Clone + Send + Sync + 'static,
{
  let posts = state.store.list_posts(POST_FETCH_LIMIT).await?;
  let html = state.templates.render(
    "index.html",
    context! { params => &state.config.site, posts },
  )?;
  Ok(Html(html))
}

/// `GET /post/{slug}`
pub async fn post_detail<S>(
  State(state): State<AppState<S>>,
  Path(slug): Path<String>,
) -> Result<Html<String>, Error>
where
  S: BlogStore + Clone + Send + Sync + 'static,
{
  let post = state
    .store
    .find_post_by_slug(&slug)
    .await?
    .ok_or_else(|| Error::NotFound(format!("no post with slug {slug:?}")))?;

  let html = state.templates.render(
    "post.html",
    context! { params => &state.config.site, post },
  )?;
  Ok(Html(html))
}

/// `GET /about`
pub async fn about<S>(
  State(state): State<AppState<S>>,
) -> Result<Html<String>, Error>
where
  S: BlogStore + Clone + Send + Sync + 'static,
{
  let html = state
    .templates
    .render("about.html", context! { params => &state.config.site })?;
  Ok(Html(html))
}
