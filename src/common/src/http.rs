use std::fmt::Display;
use std::fmt::Formatter;

use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_core::body::Body;
use axum_core::response::Response;
use bytes::Bytes;
use bytes::BytesMut;
use http_body_util::BodyExt;
use thiserror::Error;
use tracing::debug;
use tracing::trace;

pub const INTERNAL_SERVER_ERROR_MSG: &str = "Internal Server Error";

/// Error rendered to the client as a plain-text body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: Option<String>,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message.clone().unwrap_or_default())
    }
}

impl ApiError {
    pub fn bad_request(err: impl ToString) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST).with_message(err.to_string())
    }

    pub fn not_found(err: impl ToString) -> Self {
        ApiError::new(StatusCode::NOT_FOUND).with_message(err.to_string())
    }

    pub fn internal() -> Self {
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR)
            .with_message(INTERNAL_SERVER_ERROR_MSG.to_string())
    }

    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            message: None,
        }
    }

    pub fn with_message(self, message: String) -> Self {
        Self {
            status: self.status,
            message: Some(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!("ApiError: {:?}", self);
        (
            self.status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.message.unwrap_or_default(),
        )
            .into_response()
    }
}

/// Reads the whole request body, frame by frame. Fails if the transport breaks mid-stream.
pub async fn buffer_body(mut body: Body) -> Result<Bytes, axum::Error> {
    let mut buf = BytesMut::new();
    while let Some(frame) = body.frame().await {
        if let Ok(data) = frame?.into_data() {
            trace!("received chunk: {}", String::from_utf8_lossy(&data));
            buf.extend_from_slice(&data);
        }
    }

    let bytes = buf.freeze();
    if let Ok(body) = std::str::from_utf8(&bytes) {
        debug!("complete request body: {body}");
    }

    Ok(bytes)
}
