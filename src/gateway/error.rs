use std::fmt::Display;

use reqwest::StatusCode;
use serde::de::Error;

#[derive(Debug)]
pub enum GatewayError {
    /// Connection or protocol failure before a response was received
    RequestError(reqwest::Error),
    /// Outbound call exceeded the configured timeout
    Timeout,
    /// Gateway answered with a non-2xx status
    GatewayStatus {
        status: StatusCode,
        message: Option<String>,
    },
    GatewayDeserialization(serde_json::Error),
    /// Secret key can't be used as a bearer token
    InvalidCredential,
    InvalidBaseUrl,
}

impl GatewayError {
    /// Status code reported by the gateway itself, if the call got that far
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::GatewayStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human readable `message` from the gateway's error body
    pub fn gateway_message(&self) -> Option<&str> {
        match self {
            Self::GatewayStatus { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            return Self::Timeout;
        }
        if value.is_decode() {
            return Self::GatewayDeserialization(serde_json::Error::custom(
                "failed to decode response body",
            ));
        }
        Self::RequestError(value)
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(value: serde_json::Error) -> Self {
        Self::GatewayDeserialization(value)
    }
}

impl std::error::Error for GatewayError {}

impl Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::RequestError(e) => write!(f, "http request error: {e}"),
            GatewayError::Timeout => f.write_str("gateway request timed out"),
            GatewayError::GatewayStatus { status, message } => match message {
                Some(message) => write!(f, "gateway responded with {status}: {message}"),
                None => write!(f, "gateway responded with {status}"),
            },
            GatewayError::GatewayDeserialization(e) => {
                write!(f, "gateway response deserialization: {e}")
            }
            GatewayError::InvalidCredential => {
                f.write_str("gateway secret key is not a valid bearer token")
            }
            GatewayError::InvalidBaseUrl => f.write_str("gateway base url cannot have a path"),
        }
    }
}
