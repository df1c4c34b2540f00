use std::result;

use axum::response::IntoResponse;
use axum::response::Response;
use common::http::ApiError;
use storage::StorageError;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::error;

pub type Result<T> = result::Result<T, PlatformError>;

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("bad request: {0:?}")]
    BadRequest(String),
    #[error("conflict: {0:?}")]
    Conflict(String),
    #[error("not found: {0:?}")]
    NotFound(String),
    #[error("storage: {0:?}")]
    Storage(#[from] StorageError),
    #[error("axum: {0:?}")]
    Axum(#[from] axum::Error),
    #[error("join: {0:?}")]
    Join(#[from] JoinError),
}

impl PlatformError {
    pub fn into_api_error(self) -> ApiError {
        match self {
            PlatformError::BadRequest(msg) => ApiError::bad_request(msg),
            // duplicates are reported as a plain bad request
            PlatformError::Conflict(msg) => ApiError::bad_request(msg),
            PlatformError::NotFound(msg) => ApiError::not_found(msg),
            PlatformError::Storage(_) | PlatformError::Axum(_) | PlatformError::Join(_) => {
                error!("error processing request: {self}");
                ApiError::internal()
            }
        }
    }
}

impl IntoResponse for PlatformError {
    fn into_response(self) -> Response {
        self.into_api_error().into_response()
    }
}
