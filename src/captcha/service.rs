use async_trait::async_trait;
use reqwest::Client;
use std::error::Error;

use crate::captcha::types::SiteVerifyResponse;
use crate::impl_client_error_conversions;

#[derive(Debug)]
pub enum CaptchaError {
  Network(String),
  InvalidResponse(String),
}

impl Error for CaptchaError {}

impl std::fmt::Display for CaptchaError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      CaptchaError::Network(msg) => write!(f, "Verification endpoint unreachable: {}", msg),
      CaptchaError::InvalidResponse(msg) => write!(f, "Verification endpoint returned an invalid body: {}", msg),
    }
  }
}

impl_client_error_conversions!(CaptchaError, Network, InvalidResponse);

#[async_trait]
pub trait ChallengeVerifier: Send + Sync {
  async fn verify(&self, secret: &str, token: &str) -> Result<SiteVerifyResponse, CaptchaError>;
}

pub struct RecaptchaVerifier {
  client: Client,
  verify_url: String,
}

impl RecaptchaVerifier {
  pub fn new(client: Client, verify_url: impl Into<String>) -> Self {
    RecaptchaVerifier {
      client,
      verify_url: verify_url.into(),
    }
  }

  pub fn verify_url(&self) -> &str {
    &self.verify_url
  }
}

#[async_trait]
impl ChallengeVerifier for RecaptchaVerifier {
  /// Posts the token once. The body is parsed whatever the status code, so an error page that
  /// is not JSON surfaces as `InvalidResponse`.
  async fn verify(&self, secret: &str, token: &str) -> Result<SiteVerifyResponse, CaptchaError> {
    let response = self
      .client
      .post(&self.verify_url)
      .form(&[("secret", secret), ("response", token)])
      .send()
      .await?;

    let status = response.status();
    let body = response.bytes().await?;
    let verification: SiteVerifyResponse = serde_json::from_slice(&body)?;

    tracing::debug!(
      "Verification endpoint answered {} (success: {}, hostname: {:?})",
      status,
      verification.success,
      verification.hostname
    );

    Ok(verification)
  }
}
