//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use tracing::{debug, error};
use vxlan_controller_common::error::{CommonError, ControllerError};

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub ControllerError);

impl From<ControllerError> for AppError {
    fn from(err: ControllerError) -> Self {
        AppError(err)
    }
}

impl From<CommonError> for AppError {
    fn from(err: CommonError) -> Self {
        AppError(err.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(ControllerError::InvalidJson(rejection.body_text()))
    }
}

impl AppError {
    /// HTTPステータスコード
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            ControllerError::Common(CommonError::InvalidParams(_))
            | ControllerError::Common(CommonError::Serialization(_))
            | ControllerError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ControllerError::NetworkNotFound(_)
            | ControllerError::EndpointNotFound(_)
            | ControllerError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ControllerError::Common(CommonError::Config(_))
            | ControllerError::AllocationFailure(_)
            | ControllerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        // クライアントには external_message のみ返し、詳細はログに残す
        if status.is_server_error() {
            error!(error = %self.0, code = self.0.error_code(), "Request failed");
        } else {
            debug!(error = %self.0, code = self.0.error_code(), "Request rejected");
        }

        (status, Json(self.0.to_error_response())).into_response()
    }
}
