use std::sync::Arc;

use crate::{
  config::Config,
  domains::contact::{
    model::{ContactForm, FieldErrors, SubmissionResult},
    service::ContactService,
  },
  utils::init_contact_service,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn submit_contact(&self, form: ContactForm) -> impl std::future::Future<Output = SubmissionResult> + Send;
  fn validate_contact(&self, form: &ContactForm) -> FieldErrors;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub contact_service: Arc<dyn ContactService>,
}

impl SharedAppState {
  pub fn new(config: &Config) -> anyhow::Result<Self> {
    let contact_service = init_contact_service(config)?;
    Ok(Self::with_service(contact_service))
  }

  pub fn with_service(contact_service: impl ContactService + 'static) -> Self {
    Self {
      contact_service: Arc::new(contact_service),
    }
  }
}

impl AppState for SharedAppState {
  async fn submit_contact(&self, form: ContactForm) -> SubmissionResult {
    self.contact_service.submit(form).await
  }

  fn validate_contact(&self, form: &ContactForm) -> FieldErrors {
    self.contact_service.validate_fields(form)
  }
}
