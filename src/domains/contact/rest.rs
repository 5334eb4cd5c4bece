use axum::{
  extract::{rejection::JsonRejection, Json, State},
  response::Json as JsonResponse,
  routing::post,
  Router,
};

use super::model::{ContactForm, FieldErrors, SubmissionResult};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn contact_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/contact", post(submit_contact_handler))
    .route("/contact/validate", post(validate_contact_handler))
}

/// Every workflow outcome answers 200; only a body that cannot be read as JSON is an HTTP error.
pub async fn submit_contact_handler(
  State(state): State<SharedAppState>,
  payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<JsonResponse<SubmissionResult>, AppError> {
  let Json(form) = payload?;
  Ok(JsonResponse(state.submit_contact(form).await))
}

pub async fn validate_contact_handler(
  State(state): State<SharedAppState>,
  payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<JsonResponse<FieldErrors>, AppError> {
  let Json(form) = payload?;
  Ok(JsonResponse(state.validate_contact(&form)))
}
