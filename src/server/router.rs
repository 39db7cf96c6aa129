//! Router assembly

use crate::server::handlers::{
    export_records, health, list_records, record_stats, suggest_values,
};
use crate::server::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the full application router
///
/// Routes are the same for every record kind:
/// - GET /health - Service health probe
/// - GET /{kind} - List records with filters, search, sort, windowing
/// - GET /{kind}/stats - Dashboard statistics
/// - GET /{kind}/export - Full filtered set, unwindowed
/// - GET /{kind}/suggest - Distinct field values
pub fn build_router(state: AppState) -> Router {
    let cors_enabled = state.config.cors_enabled;

    let router = Router::new()
        .route("/health", get(health))
        .route("/{kind}", get(list_records))
        .route("/{kind}/stats", get(record_stats))
        .route("/{kind}/export", get(export_records))
        .route("/{kind}/suggest", get(suggest_values))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
