//! [`MongoStore`] — the MongoDB implementation of [`BlogStore`].

use chrono::Utc;
use futures::TryStreamExt as _;
use mongodb::{
  Client, Collection,
  bson::{doc, oid::ObjectId},
};

use quill_core::{
  Error, Result,
  contact::{Contact, ContactMessage},
  post::{Post, PostDraft},
  store::BlogStore,
};

use crate::document::{ContactDocument, PostDocument};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Quill store backed by two MongoDB collections, `posts` and `contacts`.
///
/// Cloning is cheap — collections share the driver's pooled client.
#[derive(Clone)]
pub struct MongoStore {
  posts:    Collection<PostDocument>,
  contacts: Collection<ContactDocument>,
}

impl MongoStore {
  /// Connect to `uri` and bind the collections inside `db_name`.
  ///
  /// The driver connects lazily, so this succeeds even when the server is
  /// down; unavailability surfaces on the first operation instead.
  pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
    let client = Client::with_uri_str(uri).await.map_err(driver_err)?;
    let db = client.database(db_name);
    Ok(Self {
      posts:    db.collection("posts"),
      contacts: db.collection("contacts"),
    })
  }
}

/// Parse a caller-supplied id token, rejecting anything that is not a valid
/// ObjectId instead of letting the driver panic or silently mismatch.
fn parse_id(raw: &str) -> Result<ObjectId> {
  ObjectId::parse_str(raw).map_err(|_| Error::InvalidId(raw.to_string()))
}

fn driver_err(e: mongodb::error::Error) -> Error {
  Error::Unavailable(Box::new(e))
}

// ─── Trait impl ──────────────────────────────────────────────────────────────

impl BlogStore for MongoStore {
  async fn list_posts(&self, limit: usize) -> Result<Vec<Post>> {
    let cursor = self
      .posts
      .find(doc! {})
      .limit(limit as i64)
      .await
      .map_err(driver_err)?;

    let documents: Vec<PostDocument> =
      cursor.try_collect().await.map_err(driver_err)?;
    Ok(documents.into_iter().map(PostDocument::into_post).collect())
  }

  async fn find_post_by_slug(&self, slug: &str) -> Result<Option<Post>> {
    let document = self
      .posts
      .find_one(doc! { "slug": slug })
      .await
      .map_err(driver_err)?;
    Ok(document.map(PostDocument::into_post))
  }

  async fn find_post_by_id(&self, id: &str) -> Result<Option<Post>> {
    let oid = parse_id(id)?;
    let document = self
      .posts
      .find_one(doc! { "_id": oid })
      .await
      .map_err(driver_err)?;
    Ok(document.map(PostDocument::into_post))
  }

  async fn insert_post(&self, draft: PostDraft) -> Result<Post> {
    let mut document = PostDocument::from_draft(draft, Utc::now());
    let outcome = self
      .posts
      .insert_one(&document)
      .await
      .map_err(driver_err)?;

    document.id = outcome.inserted_id.as_object_id();
    Ok(document.into_post())
  }

  async fn replace_post(&self, id: &str, draft: PostDraft) -> Result<()> {
    let oid = parse_id(id)?;
    let document = PostDocument::from_draft(draft, Utc::now());

    // replace_one keeps the matched _id; a zero-match filter is a no-op.
    self
      .posts
      .replace_one(doc! { "_id": oid }, &document)
      .await
      .map_err(driver_err)?;
    Ok(())
  }

  async fn delete_post(&self, id: &str) -> Result<()> {
    let oid = parse_id(id)?;
    self
      .posts
      .delete_one(doc! { "_id": oid })
      .await
      .map_err(driver_err)?;
    Ok(())
  }

  async fn add_contact(&self, message: ContactMessage) -> Result<Contact> {
    let mut document = ContactDocument::from_message(message, Utc::now());
    let outcome = self
      .contacts
      .insert_one(&document)
      .await
      .map_err(driver_err)?;

    document.id = outcome.inserted_id.as_object_id();
    Ok(document.into_contact())
  }
}
