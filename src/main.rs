use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cloudrun_logging::http::bind;
use cloudrun_logging::lifecycle::spawn_signal_listener;
use cloudrun_logging::logging::StderrSink;
use cloudrun_logging::trace::MetadataResolver;
use cloudrun_logging::{AppState, HttpServer, ServerConfig, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Operational diagnostics; per-request entries go through the sink.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cloudrun_logging=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(
        port = %config.port,
        grace_secs = config.grace_period.as_secs(),
        "Configuration loaded"
    );

    let listener = bind(&config).await?;

    let shutdown = Arc::new(Shutdown::new());
    let _signals = spawn_signal_listener(shutdown.clone());

    let state = AppState {
        identity: Arc::new(MetadataResolver::new()),
        sink: Arc::new(StderrSink),
    };
    let server = HttpServer::new(&config, state);
    server.run(listener, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
