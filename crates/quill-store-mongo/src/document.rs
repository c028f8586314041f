//! BSON document shapes for the `posts` and `contacts` collections, and
//! their conversions to and from the core types.
//!
//! The `_id` field is `Option<ObjectId>` and skipped when absent so that
//! inserts let the server (or driver) assign identity, while reads always
//! carry it. Timestamps round-trip through native BSON datetimes rather
//! than strings.

use bson::{
  oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quill_core::{
  contact::{Contact, ContactMessage},
  post::{Post, PostDraft},
};

// ─── Posts ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PostDocument {
  #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
  pub id:       Option<ObjectId>,
  pub title:    String,
  pub slug:     String,
  pub content:  String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tagline:  Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub img_file: Option<String>,
  #[serde(with = "chrono_datetime_as_bson_datetime")]
  pub created:  DateTime<Utc>,
}

impl PostDocument {
  /// Build an id-less document from a draft, stamping `created` now.
  /// Used for both inserts and full replaces.
  pub fn from_draft(draft: PostDraft, created: DateTime<Utc>) -> Self {
    Self {
      id: None,
      title: draft.title,
      slug: draft.slug,
      content: draft.content,
      tagline: draft.tagline,
      img_file: draft.img_file,
      created,
    }
  }

  pub fn into_post(self) -> Post {
    Post {
      id:       self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
      title:    self.title,
      slug:     self.slug,
      content:  self.content,
      tagline:  self.tagline,
      img_file: self.img_file,
      created:  self.created,
    }
  }
}

// ─── Contacts ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ContactDocument {
  #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
  pub id:        Option<ObjectId>,
  pub name:      String,
  pub email:     String,
  pub phone:     String,
  pub message:   String,
  #[serde(with = "chrono_datetime_as_bson_datetime")]
  pub submitted: DateTime<Utc>,
}

impl ContactDocument {
  pub fn from_message(message: ContactMessage, submitted: DateTime<Utc>) -> Self {
    Self {
      id: None,
      name: message.name,
      email: message.email,
      phone: message.phone,
      message: message.message,
      submitted,
    }
  }

  pub fn into_contact(self) -> Contact {
    Contact {
      id:        self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
      name:      self.name,
      email:     self.email,
      phone:     self.phone,
      message:   self.message,
      submitted: self.submitted,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn draft_document_omits_id_and_none_fields_when_serialised() {
    let doc = PostDocument::from_draft(
      PostDraft {
        title:    "Title".to_string(),
        slug:     "title".to_string(),
        content:  "Body".to_string(),
        tagline:  None,
        img_file: None,
      },
      Utc::now(),
    );

    let bson_doc = bson::to_document(&doc).unwrap();
    assert!(!bson_doc.contains_key("_id"));
    assert!(!bson_doc.contains_key("tagline"));
    assert!(!bson_doc.contains_key("img_file"));
    assert_eq!(bson_doc.get_str("slug").unwrap(), "title");
  }

  #[test]
  fn read_document_maps_object_id_to_hex() {
    let oid = ObjectId::new();
    let post = PostDocument {
      id:       Some(oid),
      title:    "Title".to_string(),
      slug:     "title".to_string(),
      content:  "Body".to_string(),
      tagline:  Some("t".to_string()),
      img_file: None,
      created:  Utc::now(),
    }
    .into_post();

    assert_eq!(post.id, oid.to_hex());
    assert_eq!(post.tagline.as_deref(), Some("t"));
  }

  #[test]
  fn contact_round_trips_through_bson() {
    let doc = ContactDocument::from_message(
      ContactMessage {
        name:    "Alice".to_string(),
        email:   "alice@example.com".to_string(),
        phone:   "555-0100".to_string(),
        message: "Hi.".to_string(),
      },
      Utc::now(),
    );

    let bson_doc = bson::to_document(&doc).unwrap();
    let back: ContactDocument = bson::from_document(bson_doc).unwrap();
    assert_eq!(back.into_contact().email, "alice@example.com");
  }
}
