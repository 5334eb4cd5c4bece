use async_trait::async_trait;
use reqwest::Client;
use std::error::Error;

use crate::email::types::EmailMessage;
use crate::impl_client_error_conversions;

#[derive(Debug)]
pub enum EmailError {
  Network(String),
  Rejected { status: u16, body: String },
}

impl Error for EmailError {}

impl std::fmt::Display for EmailError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      EmailError::Network(msg) => write!(f, "Email provider unreachable: {}", msg),
      EmailError::Rejected { status, body } => write!(f, "Email provider rejected message (status {}): {}", status, body),
    }
  }
}

impl_client_error_conversions!(EmailError, Network);

#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send_email(&self, api_key: &str, message: &EmailMessage) -> Result<(), EmailError>;
}

pub struct EmailService {
  client: Client,
  api_url: String,
}

impl EmailService {
  pub fn new(client: Client, api_url: impl Into<String>) -> Self {
    EmailService {
      client,
      api_url: api_url.into(),
    }
  }

  pub fn api_url(&self) -> &str {
    &self.api_url
  }
}

#[async_trait]
impl Mailer for EmailService {
  /// Sends one message. Only a 2xx status counts as delivered; the response body is kept for
  /// logging when the provider refuses the message.
  async fn send_email(&self, api_key: &str, message: &EmailMessage) -> Result<(), EmailError> {
    let response = self
      .client
      .post(&self.api_url)
      .header("accept", "application/json")
      .header("api-key", api_key)
      .json(message)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(EmailError::Rejected {
        status: status.as_u16(),
        body,
      });
    }

    tracing::debug!("Email provider accepted message with status {}", status);
    Ok(())
  }
}
