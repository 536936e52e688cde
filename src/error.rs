use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::middleware::request_logger::current_request_id;
use crate::services::ServiceError;
use crate::validation::{FieldViolation, Violations};

pub type Result<T> = std::result::Result<T, ApiError>;

/// Error codes for categorizing errors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum ErrorCode {
    // Authentication errors (1xxx)
    #[serde(rename = "AUTH_1002")]
    TokenExpired,
    #[serde(rename = "AUTH_1003")]
    TokenInvalid,
    #[serde(rename = "AUTH_1004")]
    TokenMissing,

    // Authorization errors (2xxx)
    #[serde(rename = "AUTHZ_2001")]
    InsufficientPermissions,

    // Validation errors (3xxx)
    #[serde(rename = "VAL_3001")]
    InvalidInput,
    #[serde(rename = "VAL_3003")]
    InvalidFormat,
    #[serde(rename = "VAL_3009")]
    ConstraintViolation,
    #[serde(rename = "VAL_3010")]
    InvalidReference,

    // Resource errors (4xxx)
    #[serde(rename = "RES_4001")]
    NotFound,

    // Internal errors (9xxx)
    #[serde(rename = "INT_9999")]
    InternalServerError,
    #[serde(rename = "INT_9996")]
    StorageFailed,
}

impl ErrorCode {
    /// Get numeric code
    pub fn code(&self) -> u16 {
        match self {
            // Authentication
            ErrorCode::TokenExpired => 1002,
            ErrorCode::TokenInvalid => 1003,
            ErrorCode::TokenMissing => 1004,

            // Authorization
            ErrorCode::InsufficientPermissions => 2001,

            // Validation
            ErrorCode::InvalidInput => 3001,
            ErrorCode::InvalidFormat => 3003,
            ErrorCode::ConstraintViolation => 3009,
            ErrorCode::InvalidReference => 3010,

            // Resource
            ErrorCode::NotFound => 4001,

            // Internal
            ErrorCode::InternalServerError => 9999,
            ErrorCode::StorageFailed => 9996,
        }
    }

    /// Get user-friendly message
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::TokenExpired => "Your session has expired. Please log in again",
            ErrorCode::TokenInvalid => "Invalid authentication token",
            ErrorCode::TokenMissing => "Authentication required",

            ErrorCode::InsufficientPermissions => {
                "You don't have permission to perform this action"
            }

            ErrorCode::InvalidInput => "Invalid input provided",
            ErrorCode::InvalidFormat => "Invalid format provided",
            ErrorCode::ConstraintViolation => "Request body failed validation",
            ErrorCode::InvalidReference => "Request refers to an unknown resource",

            ErrorCode::NotFound => "The requested resource was not found",

            ErrorCode::InternalServerError => "An internal server error occurred",
            ErrorCode::StorageFailed => "The clinic store could not complete the request",
        }
    }
}

/// Structured error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    pub code: ErrorCode,
    pub code_number: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schema(value_type = Vec<Object>)]
    pub violations: Vec<serde_json::Value>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation failed: {0}")]
    Validation(Violations),

    #[error("Internal server error: {0}")]
    Internal(String),

    // Enhanced error types with codes
    #[error("{1}")]
    WithCode(ErrorCode, String),

    #[error("{1}")]
    WithCodeAndDetails(ErrorCode, String, String),
}

impl ApiError {
    /// Create error with specific error code
    pub fn with_code(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError::WithCode(code, message.into())
    }

    /// Create error with code and additional details
    pub fn with_details(
        code: ErrorCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        ApiError::WithCodeAndDetails(code, message.into(), details.into())
    }

    /// Helper: Resource not found
    pub fn not_found(resource: &str) -> Self {
        ApiError::with_code(ErrorCode::NotFound, format!("{} not found", resource))
    }

    pub fn pet_not_found(id: i32) -> Self {
        ApiError::not_found(&format!("Pet {}", id))
    }

    pub fn owner_not_found(id: i32) -> Self {
        ApiError::not_found(&format!("Owner {}", id))
    }

    /// Helper: Token expired
    pub fn token_expired() -> Self {
        ApiError::with_code(ErrorCode::TokenExpired, "Token expired")
    }

    /// Get error code
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ApiError::Unauthorized(_) => ErrorCode::TokenMissing,
            ApiError::Forbidden(_) => ErrorCode::InsufficientPermissions,
            ApiError::Validation(_) => ErrorCode::ConstraintViolation,
            ApiError::Internal(_) => ErrorCode::InternalServerError,
            ApiError::WithCode(code, _) => *code,
            ApiError::WithCodeAndDetails(code, _, _) => *code,
        }
    }

    /// Get error details
    fn error_details(&self) -> Option<String> {
        match self {
            ApiError::WithCodeAndDetails(_, _, details) => Some(details.clone()),
            _ => None,
        }
    }

    /// Single offending field, when exactly one was reported
    fn error_field(&self) -> Option<String> {
        match self {
            ApiError::Validation(violations) if violations.len() == 1 => {
                violations.iter().next().map(|v| v.field.clone())
            }
            _ => None,
        }
    }

    fn violations(&self) -> Vec<serde_json::Value> {
        match self {
            ApiError::Validation(violations) => violations
                .iter()
                .filter_map(|v: &FieldViolation| serde_json::to_value(v).ok())
                .collect(),
            _ => Vec::new(),
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::WithCode(_, msg) | ApiError::WithCodeAndDetails(_, msg, _) => msg.clone(),
            ApiError::Unauthorized(msg) | ApiError::Forbidden(msg) => msg.clone(),
            _ => self.error_code().message().to_string(),
        }
    }

    /// Get status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_)
            | ApiError::WithCode(ErrorCode::TokenExpired, _)
            | ApiError::WithCode(ErrorCode::TokenInvalid, _)
            | ApiError::WithCode(ErrorCode::TokenMissing, _) => StatusCode::UNAUTHORIZED,

            ApiError::Forbidden(_) | ApiError::WithCode(ErrorCode::InsufficientPermissions, _) => {
                StatusCode::FORBIDDEN
            }

            ApiError::Validation(_)
            | ApiError::WithCode(ErrorCode::InvalidInput, _)
            | ApiError::WithCode(ErrorCode::InvalidFormat, _)
            | ApiError::WithCode(ErrorCode::InvalidReference, _)
            | ApiError::WithCodeAndDetails(ErrorCode::InvalidInput, _, _)
            | ApiError::WithCodeAndDetails(ErrorCode::InvalidFormat, _, _)
            | ApiError::WithCodeAndDetails(ErrorCode::InvalidReference, _, _) => {
                StatusCode::BAD_REQUEST
            }

            ApiError::WithCode(ErrorCode::NotFound, _)
            | ApiError::WithCodeAndDetails(ErrorCode::NotFound, _, _) => StatusCode::NOT_FOUND,

            ApiError::Internal(_)
            | ApiError::WithCode(_, _)
            | ApiError::WithCodeAndDetails(_, _, _) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log error with appropriate level
    fn log_error(&self, request_id: &str) {
        match self.status_code() {
            status if status.is_server_error() => {
                error!(
                    request_id = %request_id,
                    error = %self,
                    "Server error occurred"
                );
            }
            status if status.is_client_error() => {
                warn!(
                    request_id = %request_id,
                    error = %self,
                    "Client error occurred"
                );
            }
            _ => {}
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let request_id = current_request_id().unwrap_or_else(|| Uuid::new_v4().to_string());
        let status = self.status_code();
        let code = self.error_code();

        self.log_error(&request_id);

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code,
                code_number: code.code(),
                message: self.message(),
                details: self.error_details(),
                field: self.error_field(),
                violations: self.violations(),
            },
            request_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<Violations> for ApiError {
    fn from(violations: Violations) -> Self {
        ApiError::Validation(violations)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { entity, id } => {
                ApiError::not_found(&format!("{} {}", capitalize(entity), id))
            }
            ServiceError::UnknownReference { entity, id } => ApiError::with_details(
                ErrorCode::InvalidReference,
                ErrorCode::InvalidReference.message(),
                format!("unknown {} {}", entity, id),
            ),
            ServiceError::Storage(msg) => ApiError::with_details(
                ErrorCode::StorageFailed,
                ErrorCode::StorageFailed.message(),
                msg,
            ),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Handle Axum JSON rejections and convert to structured API errors
pub fn handle_rejection(err: JsonRejection) -> ApiError {
    match err {
        JsonRejection::JsonDataError(e) => ApiError::with_details(
            ErrorCode::InvalidInput,
            "Invalid input provided",
            e.body_text(),
        ),
        JsonRejection::JsonSyntaxError(e) => {
            ApiError::with_details(ErrorCode::InvalidFormat, "Invalid JSON format", e.body_text())
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::with_code(ErrorCode::InvalidFormat, "JSON content type required")
        }
        JsonRejection::BytesRejection(_) => {
            ApiError::with_code(ErrorCode::InvalidInput, "Invalid request body format")
        }
        _ => ApiError::with_details(
            ErrorCode::InvalidInput,
            "Invalid input provided",
            err.body_text(),
        ),
    }
}
