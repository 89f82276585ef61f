use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;

use walletd_ledger::{LedgerError, ValidationError};

/// Failures of the server itself (startup, config, I/O).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Request-level failures, mapped to HTTP responses.
///
/// Every failure class from the core has exactly one status: validation
/// errors are 400, unknown wallets on reads are 404, insufficient funds and
/// version conflicts are both 409 (distinguished only by the payload
/// message), anything else is 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

#[derive(Serialize)]
struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::Validation(err) => {
                (StatusCode::BAD_REQUEST, Some("BAD_REQUEST"), err.to_string())
            }
            Self::Ledger(LedgerError::WalletNotFound) => (
                StatusCode::NOT_FOUND,
                Some("NOT_FOUND"),
                "wallet not found".to_string(),
            ),
            Self::Ledger(err) if err.is_conflict() => {
                (StatusCode::CONFLICT, Some("CONFLICT"), err.to_string())
            }
            Self::Ledger(err) => {
                tracing::error!(error = %err, "internal failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    None,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { code, message })).into_response()
    }
}
