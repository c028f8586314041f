//! Contact messages submitted through the public form.
//!
//! Contacts are a write-only log: the system inserts them and never reads,
//! updates, or deletes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fields of a contact-form submission, before the store assigns
/// identity and a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
  pub name:    String,
  pub email:   String,
  pub phone:   String,
  pub message: String,
}

/// A persisted contact message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
  pub id:        String,
  pub name:      String,
  pub email:     String,
  pub phone:     String,
  pub message:   String,
  pub submitted: DateTime<Utc>,
}

impl ContactMessage {
  /// Materialise a [`Contact`] with a caller-supplied identity and
  /// submission timestamp. Used by store backends.
  pub fn into_contact(self, id: String, submitted: DateTime<Utc>) -> Contact {
    Contact {
      id,
      name: self.name,
      email: self.email,
      phone: self.phone,
      message: self.message,
      submitted,
    }
  }
}
