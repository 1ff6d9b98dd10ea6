//! Route table and shared state.

use crate::error::ApiError;
use crate::handlers;
use crate::params::Limits;
use crate::views::section_path;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, MethodRouter};
use axum::Router;
use college_core::config::Config;
use college_core::{Catalog, Section};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub const COLLEGES_PATH: &str = "/api/v1/colleges";

/// State handed to every handler. The catalog is immutable, so sharing it is
/// a reference-count bump.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub limits: Limits,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            limits: Limits::from(config),
        }
    }
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route(COLLEGES_PATH, get(handlers::list_colleges))
        .route(&format!("{COLLEGES_PATH}/"), get(handlers::list_colleges))
        .route(&format!("{COLLEGES_PATH}/{{id}}"), get(handlers::profile))
        .route(&format!("{COLLEGES_PATH}/{{id}}/news"), get(handlers::news));

    for section in Section::ALL {
        let path = format!("{COLLEGES_PATH}/{{id}}/{}", section_path(section));
        app = app.route(&path, section_route(section));
    }

    app.route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn section_route(section: Section) -> MethodRouter<AppState> {
    get(
        move |State(state): State<AppState>, id: Result<Path<u32>, PathRejection>| {
            handlers::section(state, id, section)
        },
    )
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    ApiError::internal("Internal server error", detail).into_response()
}
