//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! HTTPステータスへの変換はコントローラー側の `api::error` が担当し、
//! ここではエラーコードとクライアント向けメッセージのみを定義する。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Missing or malformed input, detected before any mutation
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

impl From<config::ConfigError> for CommonError {
    fn from(err: config::ConfigError) -> Self {
        CommonError::Config(err.to_string())
    }
}

/// Controller error type
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Request body could not be decoded
    #[error("Invalid JSON payload: {0}")]
    InvalidJson(String),

    /// Network not found
    #[error("Network not found: {0}")]
    NetworkNotFound(String),

    /// Endpoint not found
    #[error("Endpoint not found: {0}")]
    EndpointNotFound(String),

    /// No route matches the request path
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// Resource exhaustion while growing a table or a listing buffer
    #[error("Allocation failure: {0}")]
    AllocationFailure(String),

    /// Internal error (e.g. poisoned table lock)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ControllerError {
    /// Returns the machine-readable error code used in response bodies.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Common(CommonError::InvalidParams(_)) => "INVALID_PARAMS",
            Self::Common(CommonError::Serialization(_)) => "INVALID_JSON",
            Self::Common(CommonError::Config(_)) => "CONFIG_ERROR",
            Self::InvalidJson(_) => "INVALID_JSON",
            Self::NetworkNotFound(_) | Self::EndpointNotFound(_) | Self::RouteNotFound(_) => {
                "NOT_FOUND"
            }
            Self::AllocationFailure(_) => "ALLOCATION_FAILED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns a safe error message for external clients.
    ///
    /// Validation messages are passed through because they only echo the
    /// caller's own input; everything else is replaced with a generic text.
    /// Use `to_string()` for the full message in server logs.
    pub fn external_message(&self) -> String {
        match self {
            Self::Common(CommonError::InvalidParams(msg)) => msg.clone(),
            Self::Common(CommonError::Serialization(_)) | Self::InvalidJson(_) => {
                "Invalid JSON payload".to_string()
            }
            Self::Common(CommonError::Config(_)) => "Configuration error".to_string(),
            Self::NetworkNotFound(_) => "Network not found".to_string(),
            Self::EndpointNotFound(_) => "Endpoint not found".to_string(),
            Self::RouteNotFound(_) => "Resource not found".to_string(),
            Self::AllocationFailure(_) => "Failed to allocate storage".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// Converts this error to the response body.
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.external_message(),
        }
    }
}

/// エラーレスポンス
///
/// ```json
/// { "code": "NOT_FOUND", "message": "Network not found" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// エラーコード
    pub code: String,
    /// メッセージ
    pub message: String,
}

/// Result type alias (Common)
pub type CommonResult<T> = Result<T, CommonError>;

/// Result type alias (Controller)
pub type ControllerResult<T> = Result<T, ControllerError>;
