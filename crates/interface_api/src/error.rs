//! API error handling
//!
//! Domain errors are mapped to HTTP responses here. A missing resource is a
//! bare 404; everything else carries an [`ErrorResponse`] body.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use core_kernel::PortError;
use domain_klant::KlantError;
use domain_opstal::OpstalError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error")]
    Validation(Vec<String>),

    /// A business rule rejected the request
    #[error("{0}")]
    Conflict(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(_) => return StatusCode::NOT_FOUND.into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                "Een of meer velden zijn ongeldig.".to_string(),
                Some(details),
            ),
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, "conflict", msg, None),
            ApiError::Duplicate(msg) => (StatusCode::CONFLICT, "duplicate", msg, None),
            ApiError::Unavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg, None)
            }
            ApiError::Internal(msg) => {
                error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Er is een interne fout opgetreden.".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        if err.is_transient() {
            ApiError::Unavailable(err.to_string())
        } else if err.is_validation() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl From<KlantError> for ApiError {
    fn from(err: KlantError) -> Self {
        match err {
            KlantError::NotFound(_) => ApiError::NotFound(err.to_string()),
            KlantError::EindDatumAlGezet => ApiError::Conflict(err.to_string()),
            KlantError::Validation(details) => ApiError::Validation(details),
            KlantError::Store(e) => e.into(),
        }
    }
}

impl From<OpstalError> for ApiError {
    fn from(err: OpstalError) -> Self {
        match err {
            OpstalError::NotFound(_)
            | OpstalError::PolisNummerNotFound(_)
            | OpstalError::KlantNotFound(_) => ApiError::NotFound(err.to_string()),
            OpstalError::KlantBeeindigd(_) | OpstalError::EindDatumAlGezet => {
                ApiError::Conflict(err.to_string())
            }
            OpstalError::DuplicatePolisNummer(_) => ApiError::Duplicate(err.to_string()),
            OpstalError::Validation(details) => ApiError::Validation(details),
            OpstalError::Store(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::KlantId;

    #[test]
    fn test_not_found_has_empty_body() {
        let response = ApiError::from(KlantError::NotFound(KlantId::new_v7())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get("content-type").is_none());
    }

    #[test]
    fn test_business_conflicts_are_bad_requests() {
        let response = ApiError::from(OpstalError::KlantBeeindigd(KlantId::new_v7())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::from(KlantError::EindDatumAlGezet).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_polis_nummer_is_conflict_status() {
        let response = ApiError::from(OpstalError::DuplicatePolisNummer(1001)).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_store_errors() {
        let response = ApiError::from(PortError::internal("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::from(PortError::connection("refused")).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_store_rejected_data_is_bad_request() {
        let response = ApiError::from(OpstalError::Store(PortError::validation(
            "violates check constraint \"opstalverzekeringen_premie_check\"",
        )))
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
