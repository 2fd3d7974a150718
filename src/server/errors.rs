use crate::error::KondateError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, info};
use serde_json::json;

/// Error returned by the HTTP handlers.
///
/// Missing input is the only failure the pipelines report; it becomes a 400.
/// Anything else reaching this point is a bug and becomes a 500.
pub struct ApiError(pub KondateError);

impl From<KondateError> for ApiError {
    fn from(err: KondateError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self.0 {
            KondateError::InvalidInput(msg) => {
                info!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
            other => {
                error!("Internal server error: {:?}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
