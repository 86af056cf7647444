//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging and metrics
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{load_config, ConfigError, ServiceConfig};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::{logging, metrics};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to initialize logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("invalid metrics address: {0}")]
    MetricsAddress(#[from] AddrParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Startup options gathered from the command line.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    pub config_path: Option<PathBuf>,
    pub bind_override: Option<String>,
}

/// Resolve the effective configuration.
pub fn resolve_config(options: &StartupOptions) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &options.config_path {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(bind) = &options.bind_override {
        config.listener.bind_address = bind.clone();
        crate::config::validation::validate_config(&config).map_err(ConfigError::Validation)?;
    }

    Ok(config)
}

/// Scrape address for the metrics exporter, if metrics are enabled.
pub fn metrics_address(config: &ServiceConfig) -> Result<Option<SocketAddr>, StartupError> {
    if !config.observability.metrics_enabled {
        return Ok(None);
    }
    Ok(Some(config.observability.metrics_address.parse()?))
}

/// Start the service and block until it has shut down.
pub async fn run(options: StartupOptions) -> Result<(), StartupError> {
    let config = resolve_config(&options)?;
    logging::init_logging(&config.observability)?;

    tracing::info!("item-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        config_path = ?options.config_path,
        "Configuration loaded"
    );

    if let Some(addr) = metrics_address(&config)? {
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
