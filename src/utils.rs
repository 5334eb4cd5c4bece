use std::{borrow::Cow, sync::LazyLock, time::Duration};

use regex::Regex;
use validator::ValidationError;

use crate::{
  captcha::RecaptchaVerifier,
  config::Config,
  domains::contact::service::ContactServiceImpl,
  email::EmailService,
};

pub mod error;

pub const COMPANY_NAME_REQUIRED: &str = "Company name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";

static EMAIL_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
  EMAIL_REGEX.is_match(email)
}

pub fn validate_company_name(company_name: &str) -> Result<(), ValidationError> {
  if company_name.trim().is_empty() {
    return Err(ValidationError::new("company_name_required").with_message(Cow::Borrowed(COMPANY_NAME_REQUIRED)));
  }

  Ok(())
}

/// Blank input is "required"; anything else must match the address pattern as typed.
pub fn validate_email_address(email: &str) -> Result<(), ValidationError> {
  if email.trim().is_empty() {
    return Err(ValidationError::new("email_required").with_message(Cow::Borrowed(EMAIL_REQUIRED)));
  }

  if !is_valid_email(email) {
    return Err(ValidationError::new("email_invalid").with_message(Cow::Borrowed(EMAIL_INVALID)));
  }

  Ok(())
}

/// Collapses line breaks so requester text cannot start a new line in a single-line field.
pub fn single_line(input: &str) -> String {
  input.split(['\r', '\n']).filter(|part| !part.is_empty()).collect::<Vec<_>>().join(" ")
}

pub fn init_http_client(timeout: Duration) -> anyhow::Result<reqwest::Client> {
  let client = reqwest::Client::builder()
    .timeout(timeout)
    .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
    .build()?;
  Ok(client)
}

pub fn init_contact_service(config: &Config) -> anyhow::Result<ContactServiceImpl<RecaptchaVerifier, EmailService>> {
  let client = init_http_client(config.http_timeout)?;

  let verifier = RecaptchaVerifier::new(client.clone(), config.contact.recaptcha_verify_url.clone());
  let email_service = EmailService::new(client, config.contact.brevo_api_url.clone());

  Ok(ContactServiceImpl::new(config.contact.clone(), verifier, email_service))
}
