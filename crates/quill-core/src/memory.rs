//! [`MemoryStore`] — a reference in-memory implementation of [`BlogStore`].
//!
//! Backs the web layer's integration tests and doubles as documentation of
//! the store contract. Ids are UUID simple strings; anything that does not
//! parse as a UUID is rejected as [`Error::InvalidId`], mirroring how a real
//! backend treats malformed identity tokens.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::{
  Error, Result,
  contact::{Contact, ContactMessage},
  post::{Post, PostDraft},
  store::BlogStore,
};

#[derive(Default)]
struct Inner {
  posts:    Vec<Post>,
  contacts: Vec<Contact>,
}

/// An in-memory blog store. Cloning is cheap — the state is shared.
#[derive(Clone, Default)]
pub struct MemoryStore {
  inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of persisted posts, regardless of any listing limit.
  pub fn post_count(&self) -> usize {
    self.inner.lock().expect("store lock poisoned").posts.len()
  }

  /// Snapshot of the persisted contacts, for test assertions.
  pub fn contacts(&self) -> Vec<Contact> {
    self
      .inner
      .lock()
      .expect("store lock poisoned")
      .contacts
      .clone()
  }
}

fn check_id(raw: &str) -> Result<Uuid> {
  Uuid::try_parse(raw).map_err(|_| Error::InvalidId(raw.to_string()))
}

fn new_id() -> String {
  Uuid::new_v4().simple().to_string()
}

impl BlogStore for MemoryStore {
  async fn list_posts(&self, limit: usize) -> Result<Vec<Post>> {
    let inner = self.inner.lock().expect("store lock poisoned");
    Ok(inner.posts.iter().take(limit).cloned().collect())
  }

  async fn find_post_by_slug(&self, slug: &str) -> Result<Option<Post>> {
    let inner = self.inner.lock().expect("store lock poisoned");
    Ok(inner.posts.iter().find(|p| p.slug == slug).cloned())
  }

  async fn find_post_by_id(&self, id: &str) -> Result<Option<Post>> {
    check_id(id)?;
    let inner = self.inner.lock().expect("store lock poisoned");
    Ok(inner.posts.iter().find(|p| p.id == id).cloned())
  }

  async fn insert_post(&self, draft: PostDraft) -> Result<Post> {
    let post = draft.into_post(new_id(), Utc::now());
    let mut inner = self.inner.lock().expect("store lock poisoned");
    inner.posts.push(post.clone());
    Ok(post)
  }

  async fn replace_post(&self, id: &str, draft: PostDraft) -> Result<()> {
    check_id(id)?;
    let mut inner = self.inner.lock().expect("store lock poisoned");
    if let Some(existing) = inner.posts.iter_mut().find(|p| p.id == id) {
      *existing = draft.into_post(id.to_string(), Utc::now());
    }
    Ok(())
  }

  async fn delete_post(&self, id: &str) -> Result<()> {
    check_id(id)?;
    let mut inner = self.inner.lock().expect("store lock poisoned");
    inner.posts.retain(|p| p.id != id);
    Ok(())
  }

  async fn add_contact(&self, message: ContactMessage) -> Result<Contact> {
    let contact = message.into_contact(new_id(), Utc::now());
    let mut inner = self.inner.lock().expect("store lock poisoned");
    inner.contacts.push(contact.clone());
    Ok(contact)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn draft(slug: &str) -> PostDraft {
    PostDraft {
      title:    format!("Title for {slug}"),
      slug:     slug.to_string(),
      content:  "Lorem ipsum.".to_string(),
      tagline:  Some("a tagline".to_string()),
      img_file: None,
    }
  }

  #[tokio::test]
  async fn insert_assigns_identity_and_listing_includes_it() {
    let s = MemoryStore::new();

    let post = s.insert_post(draft("hello")).await.unwrap();
    assert!(!post.id.is_empty());

    let listed = s.list_posts(100).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, post.id);
    assert_eq!(listed[0].slug, "hello");
  }

  #[tokio::test]
  async fn find_by_slug_hits_and_misses() {
    let s = MemoryStore::new();
    s.insert_post(draft("first")).await.unwrap();

    let found = s.find_post_by_slug("first").await.unwrap();
    assert!(found.is_some());

    let missing = s.find_post_by_slug("no-such-slug").await.unwrap();
    assert!(missing.is_none());
  }

  #[tokio::test]
  async fn find_by_slug_is_first_match_when_slugs_collide() {
    let s = MemoryStore::new();
    let first = s.insert_post(draft("dup")).await.unwrap();
    s.insert_post(draft("dup")).await.unwrap();

    let found = s.find_post_by_slug("dup").await.unwrap().unwrap();
    assert_eq!(found.id, first.id);
  }

  #[tokio::test]
  async fn replace_overwrites_every_field() {
    let s = MemoryStore::new();
    let post = s.insert_post(draft("old")).await.unwrap();

    let replacement = PostDraft {
      title:    "New title".to_string(),
      slug:     "new".to_string(),
      content:  "New content.".to_string(),
      tagline:  None,
      img_file: None,
    };
    s.replace_post(&post.id, replacement).await.unwrap();

    let stored = s.find_post_by_slug("new").await.unwrap().unwrap();
    assert_eq!(stored.id, post.id);
    assert_eq!(stored.title, "New title");
    // Not resubmitted, therefore cleared — full replace, not a patch.
    assert_eq!(stored.tagline, None);
    assert!(s.find_post_by_slug("old").await.unwrap().is_none());
  }

  #[tokio::test]
  async fn replace_of_absent_id_is_a_silent_noop() {
    let s = MemoryStore::new();
    s.insert_post(draft("only")).await.unwrap();

    let absent = Uuid::new_v4().simple().to_string();
    s.replace_post(&absent, draft("ghost")).await.unwrap();

    assert_eq!(s.post_count(), 1);
    assert!(s.find_post_by_slug("ghost").await.unwrap().is_none());
  }

  #[tokio::test]
  async fn delete_of_absent_id_leaves_collection_unchanged() {
    let s = MemoryStore::new();
    s.insert_post(draft("kept")).await.unwrap();

    let absent = Uuid::new_v4().simple().to_string();
    s.delete_post(&absent).await.unwrap();
    assert_eq!(s.post_count(), 1);
  }

  #[tokio::test]
  async fn malformed_id_is_rejected_not_swallowed() {
    let s = MemoryStore::new();

    let err = s.replace_post("not-an-id", draft("x")).await.unwrap_err();
    assert!(matches!(err, Error::InvalidId(_)));

    let err = s.delete_post("not-an-id").await.unwrap_err();
    assert!(matches!(err, Error::InvalidId(_)));
  }

  #[tokio::test]
  async fn listing_respects_the_limit() {
    let s = MemoryStore::new();
    for i in 0..150 {
      s.insert_post(draft(&format!("post-{i}"))).await.unwrap();
    }

    let listed = s.list_posts(100).await.unwrap();
    assert_eq!(listed.len(), 100);
    assert_eq!(s.post_count(), 150);
  }

  #[tokio::test]
  async fn contact_is_stamped_within_the_call_window() {
    let s = MemoryStore::new();

    let before = Utc::now();
    let contact = s
      .add_contact(ContactMessage {
        name:    "Alice".to_string(),
        email:   "alice@example.com".to_string(),
        phone:   "555-0100".to_string(),
        message: "Hello there.".to_string(),
      })
      .await
      .unwrap();
    let after = Utc::now();

    assert!(contact.submitted >= before && contact.submitted <= after);
    assert_eq!(s.contacts().len(), 1);
    assert_eq!(s.contacts()[0].name, "Alice");
  }
}
