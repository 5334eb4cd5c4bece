//! Anti-abuse challenge verification
//!
//! Tokens issued by the reCAPTCHA widget are checked against Google's `siteverify` endpoint.

mod service;
mod types;

pub use service::{CaptchaError, ChallengeVerifier, RecaptchaVerifier};
pub use types::SiteVerifyResponse;
