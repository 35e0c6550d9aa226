//! EKS demo service entry point.
//!
//! Initializes tracing, loads configuration from the environment, resolves
//! the pod identity, sets up the Axum router, and starts the HTTP server.
//! A failure to bind the listening socket is fatal and exits non-zero.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eks_demo::config::{AppConfig, DEFAULT_LOG_FILTER};
use eks_demo::routes::create_router;
use eks_demo::state::{AppState, PodIdentity};

/// Startup failure. Any of these terminates the process with a non-zero
/// exit status; there is no retry logic.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Initialize tracing with priority: env > default
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration once; PORT falls back to 3000 if unset or unusable
    let config = AppConfig::from_env();

    // Resolve host identity once at startup; it cannot change for the
    // lifetime of this process
    let identity = PodIdentity::resolve();

    let state = AppState::new(config.clone(), identity.clone());
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.clone(),
            source,
        })?;

    // The port may differ from the configured one when PORT=0 requested an
    // ephemeral port
    let port = listener
        .local_addr()
        .map(|a| a.port())
        .unwrap_or(config.port);
    tracing::info!("Hello World app listening on port {}", port);
    tracing::info!("Pod: {}", identity.hostname);

    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
