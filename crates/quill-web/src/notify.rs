//! SMTP notification for contact-form submissions.
//!
//! Disabled unless `[mail] enabled = true` in the configuration. Delivery
//! is best-effort: the contact document is committed before the mail is
//! attempted, and a send failure is logged, never surfaced to the visitor.

use async_trait::async_trait;
use lettre::{
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
  message::Mailbox, transport::smtp::authentication::Credentials,
};
use serde::Deserialize;
use thiserror::Error;

use quill_core::contact::Contact;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MailConfig {
  #[serde(default)]
  pub enabled:       bool,
  #[serde(default)]
  pub smtp_host:     String,
  #[serde(default)]
  pub smtp_username: String,
  #[serde(default)]
  pub smtp_password: String,
  /// Address the notification is delivered to.
  #[serde(default)]
  pub recipient:     String,
}

#[derive(Debug, Error)]
pub enum MailError {
  #[error("invalid mail address: {0}")]
  Address(#[from] lettre::address::AddressError),

  #[error("message build failed: {0}")]
  Message(#[from] lettre::error::Error),

  #[error("smtp transport failed: {0}")]
  Transport(#[from] lettre::transport::smtp::Error),
}

/// Delivery of contact notifications.
///
/// The web layer holds this as a trait object; [`Mailer`] is the SMTP
/// implementation, and tests substitute their own.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
  /// Deliver a notification for one submitted contact message.
  async fn notify_contact(&self, contact: &Contact) -> Result<(), MailError>;
}

/// An SMTP transport bound to a fixed sender and recipient.
pub struct Mailer {
  transport: AsyncSmtpTransport<Tokio1Executor>,
  sender:    Mailbox,
  recipient: Mailbox,
}

impl Mailer {
  /// Build a mailer from config. `Ok(None)` when notification is disabled.
  pub fn from_config(config: &MailConfig) -> Result<Option<Self>, MailError> {
    if !config.enabled {
      return Ok(None);
    }

    let transport =
      AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        .credentials(Credentials::new(
          config.smtp_username.clone(),
          config.smtp_password.clone(),
        ))
        .build();

    Ok(Some(Self {
      transport,
      sender: config.smtp_username.parse()?,
      recipient: config.recipient.parse()?,
    }))
  }
}

#[async_trait]
impl ContactNotifier for Mailer {
  async fn notify_contact(&self, contact: &Contact) -> Result<(), MailError> {
    let email = Message::builder()
      .from(self.sender.clone())
      .to(self.recipient.clone())
      .subject(format!("New message from {}", contact.name))
      .body(format!("{}\n{}", contact.message, contact.phone))?;

    self.transport.send(email).await?;
    Ok(())
  }
}
