use crate::{dto::CacheSnapshotResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_cache")]
pub async fn get_cache(State(state): State<AppState>) -> Json<CacheSnapshotResponse> {
    let snapshot = state.get_snapshot.execute();

    debug!(
        size = snapshot.size,
        wildcard = snapshot.wildcard.len(),
        black = snapshot.black_domains.len(),
        "Cache snapshot retrieved"
    );

    Json(snapshot.into())
}
