//! HTTP handlers for record operations
//!
//! All handlers work the same way for both record kinds; the path segment
//! picks the kind and everything else flows through [`RecordQuery`].

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;

use crate::core::auth::Caller;
use crate::core::error::EngineError;
use crate::core::filter::RecordFilter;
use crate::core::page::Page;
use crate::core::query::{ListParams, RecordQuery};
use crate::core::record::{Record, RecordKind};
use crate::core::stats::RecordStats;
use crate::server::state::AppState;

/// Scope accepted by the stats endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StatsParams {
    pub district: Option<String>,
}

/// Field selector for the suggestion endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SuggestParams {
    pub field: String,
}

/// Resolve a path segment to a record kind
///
/// "needs" and "providers" are the only registered collections; anything
/// else is a 404 with code `UNKNOWN_RECORD_KIND`.
fn parse_kind(segment: &str) -> Result<RecordKind, EngineError> {
    RecordKind::from_path(segment).ok_or_else(|| EngineError::UnknownKind {
        kind: segment.to_string(),
    })
}

/// Service health probe
///
/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "reliefdesk",
    }))
}

/// List one page of records
///
/// GET /{kind}
///
/// Examples:
/// - GET /needs?district=Feni&sortBy=priority&order=asc
/// - GET /providers?q=boat&skip=20&limit=20
///
/// Unknown query parameters are rejected rather than silently ignored.
pub async fn list_records(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Record>>, EngineError> {
    let kind = parse_kind(&kind)?;
    let caller = Caller::from_headers(&headers);
    let query = RecordQuery::from_params(kind, &params)?;
    let page = params.page_request(state.config.default_page_size, state.config.max_page_size);

    let page = state.engine.list(&query, page, &caller).await?;
    Ok(Json(page))
}

/// Dashboard statistics for one record kind
///
/// GET /{kind}/stats
///
/// Examples:
/// - GET /needs/stats
/// - GET /needs/stats?district=Feni
pub async fn record_stats(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<StatsParams>,
) -> Result<Json<RecordStats>, EngineError> {
    let kind = parse_kind(&kind)?;
    let scope = RecordFilter::from_values(params.district.as_deref(), None, None, None, None)?;

    let stats = state.engine.stats(kind, scope).await?;
    Ok(Json(stats))
}

/// Full filtered record set, unwindowed
///
/// GET /{kind}/export
///
/// Accepts the same filters and sort as the list endpoint; `skip`, `page`
/// and `limit` are accepted and ignored so a list URL can be replayed as
/// an export URL unchanged.
pub async fn export_records(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Record>>, EngineError> {
    let kind = parse_kind(&kind)?;
    let caller = Caller::from_headers(&headers);
    let query = RecordQuery::from_params(kind, &params)?;

    let records = state.engine.export_all(&query, &caller).await?;
    Ok(Json(records))
}

/// Distinct values of one suggestible field
///
/// GET /{kind}/suggest?field=district
///
/// Supported fields: district, status, tag. Responses never include
/// contact details, so no role header is consulted.
pub async fn suggest_values(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<Vec<String>>, EngineError> {
    let kind = parse_kind(&kind)?;

    let values = state.engine.suggest(kind, &params.field).await?;
    Ok(Json(values))
}
