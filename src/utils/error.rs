use axum::{
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn unsupported_media_type(message: impl Into<String>) -> Self {
    Self::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<JsonRejection> for AppError {
  fn from(rejection: JsonRejection) -> Self {
    tracing::warn!("Rejected request body: {}", rejection.body_text());
    match rejection {
      JsonRejection::MissingJsonContentType(_) => {
        AppError::unsupported_media_type("Expected request with `Content-Type: application/json`")
      }
      _ => AppError::bad_request("Invalid JSON format"),
    }
  }
}
