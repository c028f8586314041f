//! The `BlogStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `quill-store-mongo`).
//! The web layer depends on this abstraction, not on any concrete backend.
//!
//! Ids cross the trait as opaque strings because their shape is a backend
//! concern; a backend rejects tokens it cannot parse with
//! [`Error::InvalidId`](crate::Error::InvalidId).
//!
//! All methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use crate::{
  Result,
  contact::{Contact, ContactMessage},
  post::{Post, PostDraft},
};

/// Abstraction over a Quill storage backend.
pub trait BlogStore: Send + Sync {
  /// List up to `limit` posts in store-default order.
  fn list_posts(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<Post>>> + Send + '_;

  /// Find the first post whose slug matches exactly. `Ok(None)` on miss.
  fn find_post_by_slug<'a>(
    &'a self,
    slug: &'a str,
  ) -> impl Future<Output = Result<Option<Post>>> + Send + 'a;

  /// Find the post with the given id. `Ok(None)` on miss,
  /// [`Error::InvalidId`](crate::Error::InvalidId) on a malformed token.
  fn find_post_by_id<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Post>>> + Send + 'a;

  /// Persist a new post. The store assigns the identity and the `created`
  /// timestamp, and returns the stored post.
  fn insert_post(
    &self,
    draft: PostDraft,
  ) -> impl Future<Output = Result<Post>> + Send + '_;

  /// Overwrite every field of the post with the given id, resetting
  /// `created` to the write time. A valid id that matches nothing is a
  /// silent no-op.
  fn replace_post<'a>(
    &'a self,
    id: &'a str,
    draft: PostDraft,
  ) -> impl Future<Output = Result<()>> + Send + 'a;

  /// Delete the post with the given id. A valid id that matches nothing is
  /// a silent no-op.
  fn delete_post<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<()>> + Send + 'a;

  /// Persist a contact-form submission. The store assigns the identity and
  /// the `submitted` timestamp.
  fn add_contact(
    &self,
    message: ContactMessage,
  ) -> impl Future<Output = Result<Contact>> + Send + '_;
}
