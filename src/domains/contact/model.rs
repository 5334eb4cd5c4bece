use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::{captcha::CaptchaError, email::EmailError, utils::is_valid_email};

pub const SUBMISSION_ACCEPTED: &str = "We have received your request. Our team will contact you shortly.";

/// Contact form as posted by the website. Every field defaults to empty so a missing field is
/// reported by validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
  #[validate(custom(function = "crate::utils::validate_company_name"))]
  pub company_name: String,
  #[validate(custom(function = "crate::utils::validate_email_address"))]
  pub email: String,
  pub phone: String,
  pub comment: String,
  #[serde(alias = "recaptchaToken")]
  pub verification_token: String,
}

/// A submission that passed server-side validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
  pub company_name: String,
  pub email: String,
  pub phone: Option<String>,
  pub comment: Option<String>,
  pub verification_token: String,
}

impl TryFrom<ContactForm> for ContactRequest {
  type Error = SubmissionFailure;

  fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
    let company_name = form.company_name.trim();
    let email = form.email.trim();
    let verification_token = form.verification_token.trim();

    if company_name.is_empty() || email.is_empty() || verification_token.is_empty() {
      return Err(SubmissionFailure::MissingFields);
    }

    if !is_valid_email(email) {
      return Err(SubmissionFailure::InvalidEmail);
    }

    Ok(ContactRequest {
      company_name: company_name.to_string(),
      email: email.to_string(),
      phone: non_blank(&form.phone),
      comment: non_blank(&form.comment),
      verification_token: verification_token.to_string(),
    })
  }
}

fn non_blank(value: &str) -> Option<String> {
  let value = value.trim();
  (!value.is_empty()).then(|| value.to_string())
}

/// Per-field messages for interactive validation while the user fills the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub company_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  pub valid: bool,
}

impl ContactForm {
  pub fn field_errors(&self) -> FieldErrors {
    match self.validate() {
      Ok(()) => FieldErrors {
        valid: true,
        ..Default::default()
      },
      Err(errors) => FieldErrors {
        company_name: first_message(&errors, "company_name", "companyName"),
        email: first_message(&errors, "email", "email"),
        valid: false,
      },
    }
  }
}

// validator keys errors by the serde name when one is set, by the field ident otherwise
fn first_message(errors: &ValidationErrors, field: &str, serde_name: &str) -> Option<String> {
  let fields = errors.field_errors();
  fields
    .get(field)
    .or_else(|| fields.get(serde_name))
    .and_then(|errs| errs.first())
    .map(|err| match &err.message {
      Some(message) => message.to_string(),
      None => err.code.to_string(),
    })
}

/// Every way a submission can end without an email being accepted.
#[derive(Debug)]
pub enum SubmissionFailure {
  Configuration { missing: Vec<&'static str> },
  MissingFields,
  InvalidEmail,
  ChallengeUnavailable(CaptchaError),
  ChallengeRejected { error_codes: Vec<String> },
  DeliveryUnavailable(String),
  DeliveryRejected { status: u16, body: String },
}

impl SubmissionFailure {
  pub fn user_message(&self) -> &'static str {
    match self {
      SubmissionFailure::Configuration { .. } => "System configuration error.",
      SubmissionFailure::MissingFields | SubmissionFailure::InvalidEmail => "Missing required fields.",
      SubmissionFailure::ChallengeUnavailable(_) => "Failed to verify security check.",
      SubmissionFailure::ChallengeRejected { .. } => "Security check failed. Please try again.",
      SubmissionFailure::DeliveryUnavailable(_) => "An unexpected error occurred.",
      SubmissionFailure::DeliveryRejected { .. } => "Failed to send request. Please try again.",
    }
  }

  /// Provider detail goes to the log only, never into the user message.
  pub fn log(&self) {
    match self {
      SubmissionFailure::Configuration { missing } => {
        tracing::error!("Contact form is not configured; missing {:?}", missing)
      }
      SubmissionFailure::MissingFields => tracing::warn!("Submission rejected: missing required fields"),
      SubmissionFailure::InvalidEmail => tracing::warn!("Submission rejected: malformed email address"),
      SubmissionFailure::ChallengeUnavailable(err) => tracing::error!("Captcha verification failed: {}", err),
      SubmissionFailure::ChallengeRejected { error_codes } => {
        tracing::warn!("Captcha verification rejected token: {:?}", error_codes)
      }
      SubmissionFailure::DeliveryUnavailable(err) => tracing::error!("Failed to reach email provider: {}", err),
      SubmissionFailure::DeliveryRejected { status, body } => {
        tracing::error!("Email provider refused message with status {}: {}", status, body)
      }
    }
  }
}

impl From<EmailError> for SubmissionFailure {
  fn from(err: EmailError) -> Self {
    match err {
      EmailError::Network(msg) => SubmissionFailure::DeliveryUnavailable(msg),
      EmailError::Rejected { status, body } => SubmissionFailure::DeliveryRejected { status, body },
    }
  }
}

/// Outcome handed back to the website. `succeeded` travels as `success`, the shape the form
/// reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmissionResult {
  #[serde(rename = "success")]
  pub succeeded: bool,
  pub message: String,
}

impl SubmissionResult {
  pub fn accepted() -> Self {
    SubmissionResult {
      succeeded: true,
      message: SUBMISSION_ACCEPTED.to_string(),
    }
  }
}

impl From<SubmissionFailure> for SubmissionResult {
  fn from(failure: SubmissionFailure) -> Self {
    SubmissionResult {
      succeeded: false,
      message: failure.user_message().to_string(),
    }
  }
}
