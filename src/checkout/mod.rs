use axum::http::StatusCode;
use serde::Serialize;

use crate::gateway::error::GatewayError;

pub mod api;
/// Static pages served to the browser
pub mod form;
pub mod initialize;
pub mod verify;

pub type Result<T> = std::result::Result<T, RelayError>;

/// Failure of a checkout operation.
///
/// Core logic returns it, [axum::response::IntoResponse] turns it into a status code and a
/// `{ "status": false, "message": ... }` body.
#[derive(Debug)]
pub enum RelayError {
    /// Caller sent malformed or incomplete input
    Validation(String),
    /// Deployment is missing the gateway credential
    Configuration,
    /// Gateway answered but declined to initialize the transaction
    GatewayRejected,
    /// Gateway answered but the transaction did not reach the success state
    VerificationFailed,
    /// Transport failure or non-2xx answer from the gateway
    GatewayUnavailable {
        status: Option<StatusCode>,
        message: String,
    },
}

impl RelayError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Maps an outbound failure, keeping the gateway's own status and message when it sent them
    pub fn from_gateway(error: GatewayError, fallback: &str) -> Self {
        match error {
            GatewayError::InvalidCredential | GatewayError::InvalidBaseUrl => Self::Configuration,
            error => Self::GatewayUnavailable {
                status: error.status(),
                message: error.gateway_message().unwrap_or(fallback).to_owned(),
            },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Validation(_)
            | RelayError::GatewayRejected
            | RelayError::VerificationFailed => StatusCode::BAD_REQUEST,
            RelayError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::GatewayUnavailable { status, .. } => {
                status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl std::error::Error for RelayError {}

impl std::fmt::Display for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelayError::Validation(message) => f.write_str(message),
            RelayError::Configuration => f.write_str("Payment service is not configured"),
            RelayError::GatewayRejected => f.write_str("Failed to initialize payment"),
            RelayError::VerificationFailed => f.write_str("Payment verification failed"),
            RelayError::GatewayUnavailable { message, .. } => f.write_str(message),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: bool,
    message: String,
}

impl axum::response::IntoResponse for RelayError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = ErrorBody {
            status: false,
            message: self.to_string(),
        };
        tracing::debug!(%status, message = %body.message, "Checkout API error response");
        (status, axum::Json(body)).into_response()
    }
}
