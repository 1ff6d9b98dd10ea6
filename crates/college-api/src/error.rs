//! Boundary errors and their status codes.
//!
//! | Variant | Status |
//! |---------|--------|
//! | `InvalidParameter` | 400 |
//! | `NotFound` | 404 |
//! | `Internal` | 500 |
//!
//! All three render as a failure [`Envelope`].

use crate::envelope::Envelope;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use college_core::PageError;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A query or path parameter failed validation.
    #[error("{0}")]
    InvalidParameter(String),
    /// The identifier names nothing the catalog knows about.
    #[error("{0}")]
    NotFound(Cow<'static, str>),
    /// Unexpected failure while assembling a response. `message` is what the
    /// client sees; `detail` is only logged.
    #[error("{message}: {detail}")]
    Internal {
        message: Cow<'static, str>,
        detail: String,
    },
}

impl ApiError {
    pub fn college_not_found() -> Self {
        ApiError::NotFound(Cow::Borrowed("College not found"))
    }

    pub fn internal(message: impl Into<Cow<'static, str>>, detail: impl ToString) -> Self {
        ApiError::Internal {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> Cow<'static, str> {
        match self {
            ApiError::InvalidParameter(msg) => Cow::Owned(msg.clone()),
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::Internal { message, .. } => message.clone(),
        }
    }
}

impl From<PageError> for ApiError {
    fn from(err: PageError) -> Self {
        ApiError::InvalidParameter(err.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidParameter(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidParameter(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal { .. } => tracing::error!(error = %self, "request failed"),
            _ => tracing::warn!(%status, error = %self, "request rejected"),
        }
        (status, Json(Envelope::failure(self.client_message()))).into_response()
    }
}
