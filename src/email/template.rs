use maud::html;

use crate::utils::single_line;

const NOT_PROVIDED: &str = "N/A";

pub struct AccessRequestDetails<'a> {
  pub company_name: &'a str,
  pub email: &'a str,
  pub phone: Option<&'a str>,
  pub comment: Option<&'a str>,
}

pub fn access_request_subject(company_name: &str) -> String {
  format!("New Access Request: {}", single_line(company_name))
}

/// Renders the notification body. maud escapes every interpolated value; line breaks in the
/// comment become `<br>`.
pub fn access_request_html(details: &AccessRequestDetails<'_>) -> String {
  let phone = details.phone.unwrap_or(NOT_PROVIDED);
  let comment = details.comment.unwrap_or(NOT_PROVIDED);

  html! {
    div style="font-family: Arial, sans-serif; padding: 20px;" {
      h2 { "New Access Request" }
      p { strong { "Company:" } " " (details.company_name) }
      p { strong { "Email:" } " " (details.email) }
      p { strong { "Phone:" } " " (phone) }
      p {
        strong { "Message:" }
        @for line in comment.lines() {
          br;
          (line)
        }
      }
    }
  }
  .into_string()
}
