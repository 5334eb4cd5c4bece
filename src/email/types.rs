use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailContact {
  pub name: String,
  pub email: String,
}

impl EmailContact {
  pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
    EmailContact {
      name: name.into(),
      email: email.into(),
    }
  }
}

/// Request body of the Brevo transactional send endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
  pub sender: EmailContact,
  pub to: Vec<EmailContact>,
  pub reply_to: EmailContact,
  pub subject: String,
  pub html_content: String,
}
