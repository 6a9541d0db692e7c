//! Browser-facing admin surface: one HTML page plus redirecting mutation
//! links. Every mutation lands back on `/`.

use crate::{
    dto::{AddRecordForm, DomainQuery},
    errors::ApiError,
    state::AppState,
    utils::render_snapshot_page,
};
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    routing::{any, get, post},
    Form, Router,
};
use tracing::{info, instrument, warn};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/remove", any(remove_record))
        .route("/add", post(add_record))
        .route("/addBlack", any(add_black_domain))
        .route("/removeBlack", any(remove_black_domain))
}

#[instrument(skip(state), name = "admin_index")]
async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.get_snapshot.execute();
    Html(render_snapshot_page(&snapshot))
}

#[instrument(skip(state), name = "admin_remove_record")]
async fn remove_record(
    State(state): State<AppState>,
    Query(params): Query<DomainQuery>,
) -> Redirect {
    if state.remove_record.execute(&params.domain) {
        info!(domain = %params.domain, "Record removed");
    }
    Redirect::temporary("/")
}

#[instrument(skip(state), name = "admin_add_record")]
async fn add_record(
    State(state): State<AppState>,
    Form(form): Form<AddRecordForm>,
) -> Result<Redirect, ApiError> {
    let record = state.add_record.execute(&form.domain, &form.ip)?;
    info!(domain = %record.domain, ip = %record.ip, "Record added");
    Ok(Redirect::permanent("/"))
}

#[instrument(skip(state), name = "admin_add_black_domain")]
async fn add_black_domain(
    State(state): State<AppState>,
    Query(params): Query<DomainQuery>,
) -> Redirect {
    match state.add_black.execute(&params.domain) {
        Ok(()) => info!(domain = %params.domain, "Domain blacklisted"),
        Err(e) => warn!(error = %e, "Ignoring blacklist addition"),
    }
    Redirect::temporary("/")
}

#[instrument(skip(state), name = "admin_remove_black_domain")]
async fn remove_black_domain(
    State(state): State<AppState>,
    Query(params): Query<DomainQuery>,
) -> Redirect {
    if state.remove_black.execute(&params.domain) {
        info!(domain = %params.domain, "Domain removed from blacklist");
    }
    Redirect::temporary("/")
}
