use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hiretrack_contact_api::app::{cors_layer, create_app};
use hiretrack_contact_api::config::Config;
use hiretrack_contact_api::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let config = Config::from_env()?;

  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  let missing = config.contact.missing_secrets();
  if !missing.is_empty() {
    tracing::warn!(
      "Contact form secrets missing ({}); submissions will report a configuration error",
      missing.join(", ")
    );
  }

  let app_state = SharedAppState::new(&config)?;
  let app = create_app(app_state).layer(cors_layer(&config.cors_allowed_origins));

  let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

  tracing::info!("Server running on http://{}", listener.local_addr()?);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
