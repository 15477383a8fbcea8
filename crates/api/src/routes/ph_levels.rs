//! Latest pH snapshot endpoint.

use axum::Json;
use axum::extract::State;
use readings::{Reading, SnapshotStore};
use serde::Serialize;

#[derive(Serialize)]
pub struct PhLevelsResponse {
    pub status: &'static str,
    pub data: Vec<Reading>,
}

/// GET /api/ph-levels — returns the most recently generated snapshot.
#[tracing::instrument(skip(store))]
pub async fn get(State(store): State<SnapshotStore>) -> Json<PhLevelsResponse> {
    let snapshot = store.current().await;
    metrics::counter!("ph_levels_requests_total").increment(1);

    Json(PhLevelsResponse {
        status: "success",
        data: snapshot.readings().to_vec(),
    })
}
