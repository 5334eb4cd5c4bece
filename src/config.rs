use std::{env, time::Duration};

use anyhow::{Context, Result};

pub const DEFAULT_RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";
pub const DEFAULT_BREVO_API_URL: &str = "https://api.brevo.com/v3/smtp/email";

/// Application configuration loaded from environment variables.
///
/// The four contact secrets are optional on purpose: a deployment that lacks one still starts,
/// and every submission answers with a configuration error until the operator fixes it.
#[derive(Debug, Clone)]
pub struct Config {
  pub host: String,
  pub port: u16,
  pub http_timeout: Duration,
  pub cors_allowed_origins: Vec<String>,
  pub contact: ContactConfig,
}

#[derive(Debug, Clone, Default)]
pub struct ContactConfig {
  pub recaptcha_secret_key: Option<String>,
  pub brevo_api_key: Option<String>,
  pub email_from: Option<String>,
  pub email_to: Option<String>,
  pub recaptcha_verify_url: String,
  pub brevo_api_url: String,
}

/// Secrets that must all be present before a submission may touch the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSecrets<'a> {
  pub recaptcha_secret_key: &'a str,
  pub brevo_api_key: &'a str,
  pub email_from: &'a str,
  pub email_to: &'a str,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    dotenvy::dotenv().ok();

    let port = optional_env("PORT")
      .unwrap_or_else(|| "8000".to_string())
      .parse::<u16>()
      .context("PORT must be a valid port number")?;

    let timeout_secs = optional_env("HTTP_TIMEOUT_SECS")
      .unwrap_or_else(|| "30".to_string())
      .parse::<u64>()
      .context("HTTP_TIMEOUT_SECS must be a whole number of seconds")?;

    let cors_allowed_origins = optional_env("CORS_ALLOWED_ORIGINS")
      .map(|origins| {
        origins
          .split(',')
          .map(str::trim)
          .filter(|origin| !origin.is_empty())
          .map(String::from)
          .collect()
      })
      .unwrap_or_default();

    Ok(Config {
      host: optional_env("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
      port,
      http_timeout: Duration::from_secs(timeout_secs),
      cors_allowed_origins,
      contact: ContactConfig::from_env(),
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

impl ContactConfig {
  pub fn from_env() -> Self {
    ContactConfig {
      recaptcha_secret_key: optional_env("RECAPTCHA_SECRET_KEY"),
      brevo_api_key: optional_env("BREVO_API_KEY"),
      email_from: optional_env("CONTACT_EMAIL_FROM"),
      email_to: optional_env("CONTACT_EMAIL_TO"),
      recaptcha_verify_url: optional_env("RECAPTCHA_VERIFY_URL")
        .unwrap_or_else(|| DEFAULT_RECAPTCHA_VERIFY_URL.to_string()),
      brevo_api_url: optional_env("BREVO_API_URL").unwrap_or_else(|| DEFAULT_BREVO_API_URL.to_string()),
    }
  }

  /// Returns the secrets only when all four are configured.
  pub fn secrets(&self) -> Option<ContactSecrets<'_>> {
    Some(ContactSecrets {
      recaptcha_secret_key: self.recaptcha_secret_key.as_deref()?,
      brevo_api_key: self.brevo_api_key.as_deref()?,
      email_from: self.email_from.as_deref()?,
      email_to: self.email_to.as_deref()?,
    })
  }

  pub fn missing_secrets(&self) -> Vec<&'static str> {
    [
      ("RECAPTCHA_SECRET_KEY", &self.recaptcha_secret_key),
      ("BREVO_API_KEY", &self.brevo_api_key),
      ("CONTACT_EMAIL_FROM", &self.email_from),
      ("CONTACT_EMAIL_TO", &self.email_to),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_none())
    .map(|(name, _)| name)
    .collect()
  }
}

/// Unset and empty variables are treated the same way.
fn optional_env(key: &str) -> Option<String> {
  env::var(key).ok().filter(|value| !value.trim().is_empty())
}
