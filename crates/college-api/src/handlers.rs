//! Request handlers.
//!
//! Extractor rejections are taken as `Result` so they surface as
//! [`ApiError::InvalidParameter`] inside the standard envelope instead of
//! axum's plain-text default.

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::params::{ListingParams, NewsParams};
use crate::router::AppState;
use crate::views::{section_message, CollegeListPage, NewsPage};
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use college_core::Section;
use serde_json::{json, Value};
use tracing::debug;

type ApiResult = Result<Envelope<Value>, ApiError>;

const LISTING_FAILED: &str = "An error occurred while fetching colleges";

/// `GET /api/v1/colleges`
pub async fn list_colleges(
    State(state): State<AppState>,
    params: Result<Query<ListingParams>, QueryRejection>,
) -> ApiResult {
    let Query(params) = params?;
    debug!(?params, "listing query");

    let (filter, page) = params.validate(&state.limits)?;
    let result = state.catalog.list_colleges(&filter, page);
    debug!(total = result.total, returned = result.items.len(), "listing served");

    let data = serde_json::to_value(CollegeListPage::from(result))
        .map_err(|e| ApiError::internal(LISTING_FAILED, e))?;
    Ok(Envelope::ok("Colleges retrieved successfully", data))
}

/// `GET /api/v1/colleges/{id}/news`
pub async fn news(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
    params: Result<Query<NewsParams>, QueryRejection>,
) -> ApiResult {
    let Path(id) = id?;
    let Query(params) = params?;
    debug!(college_id = id, ?params, "news query");

    let (search, page) = params.validate(&state.limits)?;
    let result = state.catalog.news_for(id, search.as_deref(), page);

    let data = serde_json::to_value(NewsPage::from(result))
        .map_err(|e| ApiError::internal("An error occurred while fetching news", e))?;
    Ok(Envelope::ok("College news retrieved successfully", data))
}

/// `GET /api/v1/colleges/{id}/<section>`
pub async fn section(
    state: AppState,
    id: Result<Path<u32>, PathRejection>,
    section: Section,
) -> ApiResult {
    let Path(id) = id?;
    let data = state
        .catalog
        .section(id, section)
        .ok_or_else(ApiError::college_not_found)?;
    Ok(Envelope::ok(section_message(section), data))
}

/// `GET /api/v1/colleges/{id}`
pub async fn profile(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> ApiResult {
    let Path(id) = id?;
    let profile = state
        .catalog
        .profile(id)
        .ok_or_else(ApiError::college_not_found)?;
    Ok(Envelope::ok("College retrieved successfully", Value::Object(profile)))
}

/// `GET /health`
pub async fn health() -> Envelope<Value> {
    Envelope::ok("Service is healthy", json!({ "status": "ok" }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Resource not found".into())
}
