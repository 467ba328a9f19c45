use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"status": 404, "error": "Not Found", "message": "..."}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "status": self.status.as_u16(),
            "error": self.error,
            "message": self.message,
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        if !e.is_client_error() {
            error!(err = %e, "storage failure");
        }
        match e {
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::InvalidRelationship(msg) => Self::new(StatusCode::BAD_REQUEST, "Invalid Relationship", Some(msg)),
            ServiceError::Model(ModelError::Validation(msg)) => {
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg))
            }
            ServiceError::Db(_) | ServiceError::Model(ModelError::Db(_)) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string()))
            }
        }
    }
}

impl JsonApiError {
    fn rejected(status: StatusCode, detail: String) -> Self {
        Self::new(status, status.canonical_reason().unwrap_or("Bad Request"), Some(detail))
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status() {
        let e: JsonApiError = ServiceError::not_found("Site", 1).into();
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.message.as_deref(), Some("Site with ID=1 was not found"));

        let e: JsonApiError = ServiceError::project_not_in_site(1, 2).into();
        assert_eq!(e.status, StatusCode::BAD_REQUEST);

        let e: JsonApiError = ServiceError::Model(ModelError::Validation("siteName too long".into())).into();
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.error, "Validation Error");

        let e: JsonApiError = ServiceError::Db("connection reset".into()).into();
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
