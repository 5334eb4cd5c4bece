use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  domains::contact::{
    model::{ContactForm, FieldErrors, SubmissionResult},
    service::ContactService,
  },
  state::SharedAppState,
};

/// Stands in for routes that never reach the contact workflow.
pub struct NoopContactService;

#[async_trait]
impl ContactService for NoopContactService {
  async fn submit(&self, _form: ContactForm) -> SubmissionResult {
    SubmissionResult::accepted()
  }

  fn validate_fields(&self, form: &ContactForm) -> FieldErrors {
    form.field_errors()
  }
}

pub fn app_with_service(service: impl ContactService + 'static) -> Router {
  create_app(SharedAppState::with_service(service))
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let body = serde_json::to_vec(body).expect("serialize request body");
  send(app, "POST", uri, Some("application/json"), Body::from(body)).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &'static str) -> (StatusCode, Bytes) {
  send(app, "POST", uri, Some(content_type), Body::from(body)).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  send(app, "GET", uri, None, Body::empty()).await
}

async fn send(app: Router, method: &str, uri: &str, content_type: Option<&str>, body: Body) -> (StatusCode, Bytes) {
  let mut builder = Request::builder().method(method).uri(uri);
  if let Some(content_type) = content_type {
    builder = builder.header("content-type", content_type);
  }
  let request = builder.body(body).expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
