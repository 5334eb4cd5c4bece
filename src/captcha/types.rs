use serde::Deserialize;

/// Body returned by `siteverify`. A missing `success` field reads as a failed check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SiteVerifyResponse {
  #[serde(default)]
  pub success: bool,
  #[serde(default)]
  pub hostname: Option<String>,
  #[serde(default, rename = "error-codes")]
  pub error_codes: Vec<String>,
}

impl SiteVerifyResponse {
  pub fn passed() -> Self {
    SiteVerifyResponse {
      success: true,
      ..Default::default()
    }
  }

  pub fn failed(error_codes: &[&str]) -> Self {
    SiteVerifyResponse {
      success: false,
      hostname: None,
      error_codes: error_codes.iter().map(|code| code.to_string()).collect(),
    }
  }
}
