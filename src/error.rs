/// Macro to generate common From implementations for provider client errors
///
/// Usage:
/// ```ignore
/// impl_client_error_conversions!(CaptchaError, Network);
/// impl_client_error_conversions!(CaptchaError, Network, InvalidResponse);
/// ```
#[macro_export]
macro_rules! impl_client_error_conversions {
  ($error_type:ty, $network_variant:ident) => {
    impl From<reqwest::Error> for $error_type {
      fn from(err: reqwest::Error) -> Self {
        <$error_type>::$network_variant(format!("HTTP error: {}", err))
      }
    }
  };

  ($error_type:ty, $network_variant:ident, $decode_variant:ident) => {
    impl From<reqwest::Error> for $error_type {
      fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
          <$error_type>::$decode_variant(format!("Malformed response body: {}", err))
        } else {
          <$error_type>::$network_variant(format!("HTTP error: {}", err))
        }
      }
    }

    impl From<serde_json::Error> for $error_type {
      fn from(err: serde_json::Error) -> Self {
        <$error_type>::$decode_variant(format!("Malformed response body: {}", err))
      }
    }
  };
}
