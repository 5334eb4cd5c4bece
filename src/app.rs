use axum::{
  http::{header, HeaderValue, Method},
  routing::get,
  Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
  cors::{AllowOrigin, Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{domains::contact::rest::contact_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/health", get(health_handler))
    .nest("/api/v1", contact_routes())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// An empty origin list allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
  let origins: Vec<HeaderValue> = allowed_origins
    .iter()
    .filter_map(|origin| match origin.parse::<HeaderValue>() {
      Ok(value) => Some(value),
      Err(_) => {
        tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
        None
      }
    })
    .collect();

  let allow_origin = if origins.is_empty() {
    AllowOrigin::from(Any)
  } else {
    AllowOrigin::list(origins)
  };

  CorsLayer::new()
    .allow_origin(allow_origin)
    .allow_methods([Method::GET, Method::POST])
    .allow_headers([header::CONTENT_TYPE])
}

pub async fn health_handler() -> Json<Value> {
  Json(json!({
    "status": "ok",
    "service": env!("CARGO_PKG_NAME"),
    "version": env!("CARGO_PKG_VERSION"),
  }))
}
