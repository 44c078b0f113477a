use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};

/// Failure of a single request, mapped onto an HTTP status at the boundary.
#[derive(Debug)]
pub enum AppError {
    /// No task has the requested id.
    NotFound(i64),
    /// The store could not complete a read or write.
    Storage(anyhow::Error),
    /// A template failed to render.
    Render(askama::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "task {id} not found"),
            Self::Storage(e) => write!(f, "storage error: {e:#}"),
            Self::Render(e) => write!(f, "render error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        Self::Storage(e)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        Self::Render(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => {
                warn!("{self}");
                (StatusCode::NOT_FOUND, self.to_string()).into_response()
            }
            Self::Storage(_) | Self::Render(_) => {
                error!("{self}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}
