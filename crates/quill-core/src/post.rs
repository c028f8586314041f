//! Post — the published unit of the blog.
//!
//! A post's identity is assigned by the store at creation and never changes.
//! The slug is the public lookup key; uniqueness is intended but not
//! enforced, so slug lookups are first-match-wins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The edit-form id token meaning "create a new post" rather than
/// referencing an existing one.
pub const NEW_POST_SENTINEL: &str = "0";

/// A persisted post, as read back from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
  /// Store-assigned identity, immutable after creation.
  pub id:       String,
  pub title:    String,
  pub slug:     String,
  pub content:  String,
  pub tagline:  Option<String>,
  pub img_file: Option<String>,
  pub created:  DateTime<Utc>,
}

/// The writable fields of a post, as submitted by the edit form.
///
/// Edits are full overwrites: every field of the stored post is replaced by
/// the draft, and `created` is reset by the store at write time. Fields not
/// resubmitted are therefore cleared, not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
  pub title:    String,
  pub slug:     String,
  pub content:  String,
  pub tagline:  Option<String>,
  pub img_file: Option<String>,
}

impl PostDraft {
  /// Materialise a [`Post`] from this draft with a caller-supplied identity
  /// and creation timestamp. Used by store backends.
  pub fn into_post(self, id: String, created: DateTime<Utc>) -> Post {
    Post {
      id,
      title: self.title,
      slug: self.slug,
      content: self.content,
      tagline: self.tagline,
      img_file: self.img_file,
      created,
    }
  }
}
