//! API server entry point.

use api::{Config, ServerError};
use readings::{Generator, RandSource, Regenerator, SystemClock};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Resolves on SIGINT or SIGTERM; the public listener drains, then the
/// regeneration and admin tasks are aborted.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!(signal = "SIGINT", "stopping pH API server");
        }
        () = terminate => {
            tracing::info!(signal = "SIGTERM", "stopping pH API server");
        }
    }
}

async fn run(config: Config) -> Result<(), ServerError> {
    // 1. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics(e.to_string()))?;

    // 2. Generate the initial snapshot before anything listens
    let generator = Generator::new(RandSource::from_os_rng(), SystemClock);
    let (regenerator, store) = Regenerator::new(generator, config.regeneration_interval);

    // 3. Bind both listeners; failure here is fatal
    let listener = api::bind(&config.addr()).await?;
    let admin_listener = api::bind(&config.metrics_addr()).await?;

    // 4. Start the regeneration loop and the admin server
    let regeneration = tokio::spawn(regenerator.run());
    let admin_app = api::create_admin_app(store.clone(), metrics_handle);
    let admin = tokio::spawn(async move {
        if let Err(e) = axum::serve(admin_listener, admin_app).await {
            tracing::error!(error = %e, "admin server stopped");
        }
    });

    // 5. Serve the public API until shutdown
    tracing::info!(
        addr = %config.addr(),
        metrics_addr = %config.metrics_addr(),
        interval_secs = config.regeneration_interval.as_secs(),
        "starting pH API server"
    );
    let result = axum::serve(listener, api::create_app(store))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    regeneration.abort();
    admin.abort();
    result.map_err(ServerError::from)
}

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(config).await {
        Ok(()) => tracing::info!("server shut down gracefully"),
        Err(e) => {
            tracing::error!(error = %e, "fatal error");
            std::process::exit(1);
        }
    }
}
