//! HTTP API serving the latest synthetic pH snapshot.
//!
//! The public router exposes a single read-only endpoint, `GET /api/ph-levels`,
//! with permissive CORS. A separate admin router carries `/health` and
//! Prometheus `/metrics` so the public surface stays one route.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use readings::SnapshotStore;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{Result, ServerError};

/// Creates the public router serving the snapshot held in `store`.
pub fn create_app(store: SnapshotStore) -> Router {
    Router::new()
        .route("/api/ph-levels", get(routes::ph_levels::get))
        .with_state(store)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the admin router with health and metrics endpoints.
pub fn create_admin_app(store: SnapshotStore, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .with_state(store)
        .merge(metrics_router)
        .layer(TraceLayer::new_for_http())
}

/// Binds a TCP listener on `addr`.
pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}
