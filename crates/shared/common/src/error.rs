//! Unified error handling for HTTP and gRPC.
//!
//! Provides a single error type that can be converted to:
//! - Axum HTTP responses (for the gateway)
//! - Tonic gRPC status codes (for the voter service)
//!
//! Voter errors cross the gRPC boundary with their [`DomainError::code`] in
//! the `x-error-code` metadata entry, so the gateway gets back the same kind
//! the service raised.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, ERROR_CODE_METADATA_KEY};
use serde::Serialize;
use thiserror::Error;
use tonic::{metadata::MetadataValue, Status};

/// Upstream named in unavailability errors; the gateway's only gRPC peer.
const VOTER_SERVICE_NAME: &str = "voter-service";

/// Application error types with support for both HTTP and gRPC.
#[derive(Error, Debug)]
pub enum AppError {
    // Business rules
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Malformed requests
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Service unavailable")]
    ServiceUnavailable(String),

    #[error("gRPC error: {0}")]
    Grpc(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(err) => err.code(),
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            AppError::Grpc(_) => "GRPC_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(DomainError::VoterNotFound) => StatusCode::NOT_FOUND,
            AppError::Domain(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Domain(err) if err.is_client_error() => err.to_string(),
            AppError::Validation(msg) => msg.clone(),

            // Hide details for internal errors
            AppError::Domain(err) => {
                tracing::error!("Domain error: {}", err);
                "An internal error occurred".to_string()
            }
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::ServiceUnavailable(service) => {
                tracing::error!("Service unavailable: {}", service);
                format!("Service {} is unavailable", service)
            }
            AppError::Grpc(msg) => {
                tracing::error!("gRPC error: {}", msg);
                "A service communication error occurred".to_string()
            }
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// gRPC Status (Tonic)
// =============================================================================

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        let code = match &err {
            AppError::Domain(DomainError::VoterNotFound) => tonic::Code::NotFound,
            AppError::Domain(e) if e.is_client_error() => tonic::Code::InvalidArgument,
            AppError::Validation(_) => tonic::Code::InvalidArgument,
            AppError::ServiceUnavailable(_) => tonic::Code::Unavailable,
            _ => tonic::Code::Internal,
        };

        let mut status = Status::new(code, err.user_message());
        if let AppError::Domain(domain_err) = &err {
            status.metadata_mut().insert(
                ERROR_CODE_METADATA_KEY,
                MetadataValue::from_static(domain_err.code()),
            );
        }
        status
    }
}

impl From<Status> for AppError {
    fn from(status: Status) -> Self {
        let domain_err = status
            .metadata()
            .get(ERROR_CODE_METADATA_KEY)
            .and_then(|value| value.to_str().ok())
            .and_then(DomainError::from_code);
        if let Some(err) = domain_err {
            return AppError::Domain(err);
        }

        match status.code() {
            tonic::Code::InvalidArgument => AppError::validation(status.message()),
            tonic::Code::Unavailable => {
                tracing::warn!("Voter service unavailable: {}", status.message());
                AppError::service_unavailable(VOTER_SERVICE_NAME)
            }
            _ => AppError::grpc(status.message()),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn grpc(msg: impl Into<String>) -> Self {
        AppError::Grpc(msg.into())
    }

    pub fn service_unavailable(service: impl Into<String>) -> Self {
        AppError::ServiceUnavailable(service.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_domain_error_survives_grpc_round_trip() {
        let status = Status::from(AppError::from(DomainError::AlreadyVoted));
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "Voter already voted");

        let err = AppError::from(status);
        assert!(matches!(err, AppError::Domain(DomainError::AlreadyVoted)));
    }

    #[test]
    fn test_not_found_maps_to_grpc_not_found() {
        let status = Status::from(AppError::from(DomainError::VoterNotFound));
        assert_eq!(status.code(), tonic::Code::NotFound);
        assert!(matches!(
            AppError::from(status),
            AppError::Domain(DomainError::VoterNotFound)
        ));
    }

    #[test]
    fn test_internal_domain_error_is_hidden() {
        let status = Status::from(AppError::from(DomainError::internal("argon2 exploded")));
        assert_eq!(status.code(), tonic::Code::Internal);
        assert!(!status.message().contains("argon2"));

        // Internal detail does not travel, so the gateway sees a plain gRPC error
        assert!(matches!(AppError::from(status), AppError::Grpc(_)));
    }

    #[test]
    fn test_unavailable_status_names_the_service_once() {
        let err = AppError::from(Status::unavailable("tcp connect error: Connection refused"));
        assert_eq!(err.user_message(), "Service voter-service is unavailable");

        // Survives a second trip through gRPC unchanged
        let again = AppError::from(Status::from(err));
        assert_eq!(again.user_message(), "Service voter-service is unavailable");
    }

    #[test]
    fn test_status_without_metadata() {
        let err = AppError::from(Status::unavailable("connection refused"));
        assert!(matches!(err, AppError::ServiceUnavailable(_)));

        let err = AppError::from(Status::invalid_argument("bad payload"));
        assert!(matches!(err, AppError::Validation(msg) if msg == "bad payload"));
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            AppError::from(DomainError::VoterNotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(DomainError::DuplicateEmail).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(DomainError::internal("x")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::validation("bad json").status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_http_body_carries_code_and_message() {
        let response = AppError::from(DomainError::ElectionUnavailable).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "ELECTION_NOT_FOUND");
        assert_eq!(body["error"]["message"], "Election not found");
    }
}
