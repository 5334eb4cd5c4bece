use async_trait::async_trait;
use tracing::Instrument;
use uuid::Uuid;

use super::model::{ContactForm, ContactRequest, FieldErrors, SubmissionFailure, SubmissionResult};
use crate::{
  captcha::ChallengeVerifier,
  config::{ContactConfig, ContactSecrets},
  email::{
    template::{access_request_html, access_request_subject, AccessRequestDetails},
    EmailContact, EmailMessage, Mailer,
  },
  utils::single_line,
};

const SENDER_NAME: &str = "HireTrack Website";
const RECIPIENT_NAME: &str = "HireTrack Admin";

#[async_trait]
pub trait ContactService: Send + Sync {
  /// Runs one submission to a terminal result. Never fails; every fault becomes a result.
  async fn submit(&self, form: ContactForm) -> SubmissionResult;
  fn validate_fields(&self, form: &ContactForm) -> FieldErrors;
}

pub struct ContactServiceImpl<C, M> {
  config: ContactConfig,
  verifier: C,
  mailer: M,
}

impl<C, M> ContactServiceImpl<C, M>
where
  C: ChallengeVerifier,
  M: Mailer,
{
  pub fn new(config: ContactConfig, verifier: C, mailer: M) -> Self {
    Self {
      config,
      verifier,
      mailer,
    }
  }

  async fn process(&self, form: ContactForm) -> Result<(), SubmissionFailure> {
    let secrets = self.config.secrets().ok_or_else(|| SubmissionFailure::Configuration {
      missing: self.config.missing_secrets(),
    })?;

    let request = ContactRequest::try_from(form)?;

    let verification = self
      .verifier
      .verify(secrets.recaptcha_secret_key, &request.verification_token)
      .await
      .map_err(SubmissionFailure::ChallengeUnavailable)?;

    if !verification.success {
      return Err(SubmissionFailure::ChallengeRejected {
        error_codes: verification.error_codes,
      });
    }

    let message = build_access_request_message(&secrets, &request);
    self.mailer.send_email(secrets.brevo_api_key, &message).await?;

    Ok(())
  }
}

#[async_trait]
impl<C, M> ContactService for ContactServiceImpl<C, M>
where
  C: ChallengeVerifier,
  M: Mailer,
{
  async fn submit(&self, form: ContactForm) -> SubmissionResult {
    let span = tracing::info_span!("contact_submission", submission_id = %Uuid::new_v4());

    async move {
      match self.process(form).await {
        Ok(()) => {
          tracing::info!("Access request delivered");
          SubmissionResult::accepted()
        }
        Err(failure) => {
          failure.log();
          SubmissionResult::from(failure)
        }
      }
    }
    .instrument(span)
    .await
  }

  fn validate_fields(&self, form: &ContactForm) -> FieldErrors {
    form.field_errors()
  }
}

pub fn build_access_request_message(secrets: &ContactSecrets<'_>, request: &ContactRequest) -> EmailMessage {
  EmailMessage {
    sender: EmailContact::new(SENDER_NAME, secrets.email_from),
    to: vec![EmailContact::new(RECIPIENT_NAME, secrets.email_to)],
    reply_to: EmailContact::new(single_line(&request.company_name), request.email.as_str()),
    subject: access_request_subject(&request.company_name),
    html_content: access_request_html(&AccessRequestDetails {
      company_name: &request.company_name,
      email: &request.email,
      phone: request.phone.as_deref(),
      comment: request.comment.as_deref(),
    }),
  }
}
