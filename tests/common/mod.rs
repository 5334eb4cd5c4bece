#![allow(dead_code)]

use std::{
  collections::HashMap,
  sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
  },
  time::Duration,
};

use axum::{
  body::{Body, Bytes},
  extract::State,
  http::{HeaderMap, Request, StatusCode},
  response::{IntoResponse, Response},
  routing::post,
  Form, Json, Router,
};
use hiretrack_contact_api::{
  app::create_app,
  config::{Config, ContactConfig},
  state::SharedAppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;

pub const RECAPTCHA_SECRET: &str = "recaptcha-secret";
pub const BREVO_API_KEY: &str = "brevo-key";

/// How the fake verification endpoint answers.
#[derive(Clone, Copy)]
pub enum Captcha {
  Pass,
  Fail,
  Garbage,
}

#[derive(Default)]
pub struct Recorded {
  pub verify_calls: AtomicUsize,
  pub email_calls: AtomicUsize,
  pub verify_forms: Mutex<Vec<HashMap<String, String>>>,
  pub emails: Mutex<Vec<(Option<String>, Value)>>,
}

impl Recorded {
  pub fn verify_calls(&self) -> usize {
    self.verify_calls.load(Ordering::SeqCst)
  }

  pub fn email_calls(&self) -> usize {
    self.email_calls.load(Ordering::SeqCst)
  }
}

struct ProviderState {
  captcha: Captcha,
  email_status: StatusCode,
  recorded: Arc<Recorded>,
}

pub struct FakeProviders {
  pub base_url: String,
  pub recorded: Arc<Recorded>,
}

impl FakeProviders {
  pub async fn spawn(captcha: Captcha, email_status: StatusCode) -> Self {
    let recorded = Arc::new(Recorded::default());
    let state = Arc::new(ProviderState {
      captcha,
      email_status,
      recorded: recorded.clone(),
    });

    let router = Router::new()
      .route("/recaptcha/api/siteverify", post(siteverify))
      .route("/v3/smtp/email", post(send_email))
      .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
      .await
      .expect("bind fake providers");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
      axum::serve(listener, router).await.expect("serve fake providers");
    });

    FakeProviders {
      base_url: format!("http://{}", addr),
      recorded,
    }
  }

  pub fn contact_config(&self) -> ContactConfig {
    ContactConfig {
      recaptcha_secret_key: Some(RECAPTCHA_SECRET.to_string()),
      brevo_api_key: Some(BREVO_API_KEY.to_string()),
      email_from: Some("site@hiretrack.test".to_string()),
      email_to: Some("admin@hiretrack.test".to_string()),
      recaptcha_verify_url: format!("{}/recaptcha/api/siteverify", self.base_url),
      brevo_api_url: format!("{}/v3/smtp/email", self.base_url),
    }
  }
}

async fn siteverify(
  State(state): State<Arc<ProviderState>>,
  Form(form): Form<HashMap<String, String>>,
) -> Response {
  state.recorded.verify_calls.fetch_add(1, Ordering::SeqCst);
  state.recorded.verify_forms.lock().unwrap().push(form);

  match state.captcha {
    Captcha::Pass => Json(json!({ "success": true, "hostname": "hiretrack.test" })).into_response(),
    Captcha::Fail => Json(json!({ "success": false, "error-codes": ["invalid-input-response"] })).into_response(),
    Captcha::Garbage => (StatusCode::BAD_GATEWAY, "<html>upstream down</html>").into_response(),
  }
}

async fn send_email(State(state): State<Arc<ProviderState>>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
  state.recorded.email_calls.fetch_add(1, Ordering::SeqCst);
  let api_key = headers
    .get("api-key")
    .and_then(|value| value.to_str().ok())
    .map(String::from);
  state.recorded.emails.lock().unwrap().push((api_key, body));

  if state.email_status.is_success() {
    (state.email_status, Json(json!({ "messageId": "<fake@smtp-relay>" }))).into_response()
  } else {
    (state.email_status, Json(json!({ "code": "unauthorized", "message": "Key not found" }))).into_response()
  }
}

pub fn app_with_contact_config(contact: ContactConfig) -> Router {
  let config = Config {
    host: "127.0.0.1".to_string(),
    port: 0,
    http_timeout: Duration::from_secs(5),
    cors_allowed_origins: Vec::new(),
    contact,
  };
  let state = SharedAppState::new(&config).expect("build app state");
  create_app(state)
}

pub fn contact_payload() -> Value {
  json!({
    "companyName": "Acme",
    "email": "jane@acme.io",
    "phone": "+1 555 0100",
    "comment": "We have 40 recruiters.",
    "recaptchaToken": "token-123",
  })
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).unwrap()))
    .unwrap();

  let response = app.oneshot(request).await.unwrap();
  let status = response.status();
  let bytes: Bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
  (status, serde_json::from_slice(&bytes).unwrap())
}
