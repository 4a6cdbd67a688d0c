use api_client::ApiErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use executor::ExecutorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Trade rejected: {0}")]
    Executor(#[from] ExecutorError),
    #[error("Failed to read the ETF dataset: {0}")]
    Dataset(String),
}

/// Converts our custom `AppError` into an HTTP response carrying `{"message": ...}`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Executor(executor_err) => {
                let status = match &executor_err {
                    ExecutorError::InstrumentNotFound(_) => StatusCode::NOT_FOUND,
                    ExecutorError::InsufficientQuantity { .. } | ExecutorError::InvalidTrade(_) => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    ExecutorError::Api(_) => StatusCode::BAD_GATEWAY,
                };
                tracing::warn!(error = ?executor_err, status = status.as_u16(), "Trade rejected.");
                (status, executor_err.to_string())
            }
            AppError::Dataset(message) => {
                tracing::error!(%message, "Dataset error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The ETF dataset is unavailable".to_string(),
                )
            }
        };

        (status, Json(ApiErrorResponse { message })).into_response()
    }
}
