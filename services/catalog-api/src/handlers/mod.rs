pub mod associations;
pub mod components;
pub mod health;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use catena_utils::{ApiResponse, CatalogError};

/// Wrapper turning a `CatalogError` into the uniform failure envelope.
pub struct ApiError(CatalogError);

impl From<CatalogError> for ApiError {
    fn from(error: CatalogError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = %self.0, code = self.0.error_code(), "request failed");
        }

        let body: ApiResponse<serde_json::Value> = ApiResponse::failure(self.0.to_string());
        (status, Json(body)).into_response()
    }
}
