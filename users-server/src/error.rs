//! Handler-boundary errors and their envelope mapping.
//!
//! # Design
//! Handlers return `Result<_, ApiError>`. Each variant maps to exactly one
//! envelope kind, so the boundary never inspects error types at runtime:
//! validation problems become `fail`, everything else becomes `error`.

use std::collections::BTreeMap;

use axum::{
    http::{Response, StatusCode},
    response::IntoResponse,
};
use thiserror::Error;
use tracing::{debug, error};

use crate::reply::finish;

/// Field name to human-readable problem.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was understood but one or more fields are invalid.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("User Not Found")]
    NotFound,

    /// Anything the client cannot fix by changing its input.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let mut sink: Response<Vec<u8>> = Response::new(Vec::new());
        let written = match &self {
            ApiError::Validation(fields) => {
                debug!(fields = ?fields.keys().collect::<Vec<_>>(), "rejecting invalid input");
                jsend::fail(&mut sink, fields, Some(status))
            }
            ApiError::NotFound => jsend::error(&mut sink, self.to_string(), Some(status)),
            ApiError::Internal(cause) => {
                error!(%cause, "request failed");
                jsend::error(&mut sink, cause.as_str(), Some(status))
            }
        };
        finish(sink, written)
    }
}
