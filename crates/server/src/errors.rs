use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

use crate::metrics;

const STORE_UNAVAILABLE: &str = "the document store is unavailable";
const UNDECODABLE: &str = "stored document could not be decoded";

/// Error returned by API handlers, rendered as `{"error": title, "detail": detail}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }

    fn validation(msg: String) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg))
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::validation(msg),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            // store and codec messages carry paths and driver text; they stay in the logs
            ServiceError::Db(msg) => {
                error!(err = %msg, "document store unavailable");
                Self::new(StatusCode::SERVICE_UNAVAILABLE, "Persistence Unavailable", Some(STORE_UNAVAILABLE.into()))
            }
            ServiceError::Model(e) => {
                error!(err = %e, "stored document could not be decoded");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(UNDECODABLE.into()))
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(r) => {
                Self::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type", Some(r.body_text()))
            }
            other => Self::validation(other.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        metrics::record_error(self.status);
        let body = serde_json::json!({"error": self.title, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage initialisation failed: {0}")]
    Storage(#[from] ServiceError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
