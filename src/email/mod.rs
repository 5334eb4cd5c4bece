//! Transactional email delivery
//!
//! Messages are sent through the Brevo HTTP API (`POST /v3/smtp/email`). Delivery sits behind
//! the [`Mailer`] trait so the contact workflow can be exercised without a network.

mod service;
pub mod template;
mod types;

pub use service::{EmailError, EmailService, Mailer};
pub use types::{EmailContact, EmailMessage};
