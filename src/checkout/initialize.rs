use serde::Deserialize;
use serde_json::Value;

use crate::{
    checkout::{RelayError, Result},
    config::Config,
    gateway::{
        Gateway, PaystackResponse,
        initialize::{InitializeData, InitializeRequest},
    },
};

/// Smallest accepted amount, in major currency units
pub const MIN_AMOUNT: f64 = 100.0;
/// Largest amount whose minor unit value the gateway can represent
pub const MAX_AMOUNT: f64 = i64::MAX as f64 / 100.0;
/// Used when the customer did not pick a course
pub const DEFAULT_COURSE: &str = "Course";

const MISSING_FIELDS: &str = "First name, last name, and email are required";
const AMOUNT_TOO_LOW: &str = "Amount must be at least ₦100";
const AMOUNT_TOO_HIGH: &str = "Amount is too large";
const INITIALIZATION_FAILED: &str = "Payment initialization failed";

/// Body of `POST /api/initialize-payment`.
///
/// Every field is optional at the deserialization level so that missing fields are reported
/// with the checkout's own validation message instead of a serde error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
    /// Major currency units (naira)
    pub amount: Option<f64>,
}

/// [PaymentRequest] that passed validation
#[derive(Debug, Clone, Copy)]
pub struct ValidPayment<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub course: &'a str,
    pub amount: f64,
}

fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl PaymentRequest {
    pub fn validate(&self) -> Result<ValidPayment<'_>> {
        let (Some(first_name), Some(last_name), Some(email)) = (
            required(&self.first_name),
            required(&self.last_name),
            required(&self.email),
        ) else {
            return Err(RelayError::validation(MISSING_FIELDS));
        };

        // NaN fails the comparison too
        let amount = match self.amount {
            Some(amount) if amount.is_finite() && amount >= MIN_AMOUNT => amount,
            _ => return Err(RelayError::validation(AMOUNT_TOO_LOW)),
        };
        if amount >= MAX_AMOUNT {
            return Err(RelayError::validation(AMOUNT_TOO_HIGH));
        }

        Ok(ValidPayment {
            first_name,
            last_name,
            email,
            course: required(&self.course).unwrap_or(DEFAULT_COURSE),
            amount,
        })
    }
}

/// Converts a major unit amount to the gateway's minor unit, rounding to the nearest integer
pub fn to_minor_units(amount: f64) -> u64 {
    (amount * 100.0).round() as u64
}

/// Validates the request and opens a transaction on the gateway.
///
/// On success the gateway's body is returned untouched, it carries the `authorization_url`
/// the browser is redirected to and the `reference` used later for verification.
pub async fn initialize_payment(
    gateway: &dyn Gateway,
    config: &Config,
    request: &PaymentRequest,
) -> Result<Value> {
    let payment = request.validate()?;

    let Some(secret) = config.secret_key.as_ref() else {
        tracing::error!("PAYSTACK_SECRET_KEY is not set");
        return Err(RelayError::Configuration);
    };

    let payload = InitializeRequest::from((&payment, config.callback_url.as_deref()));
    let response = gateway
        .initialize_transaction(secret, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to initialize payment: {e}");
            RelayError::from_gateway(e, INITIALIZATION_FAILED)
        })?;

    if !response.get("status").and_then(Value::as_bool).unwrap_or(false) {
        let gateway_message = response.get("message").and_then(Value::as_str);
        tracing::warn!(gateway_message, "Gateway declined payment initialization");
        return Err(RelayError::GatewayRejected);
    }

    match PaystackResponse::<InitializeData>::deserialize(&response) {
        Ok(PaystackResponse {
            data: Some(data), ..
        }) => tracing::info!(reference = %data.reference, course = payment.course, "Initialized payment"),
        _ => tracing::warn!("Initialized payment without authorization data"),
    }

    Ok(response)
}
