use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    checkout::{RelayError, Result},
    config::Config,
    gateway::{
        Gateway,
        mask::{EmailMask, MaskPolicy},
        verify::{Customer, TransactionStatus, VerifyData},
    },
};

const REFERENCE_REQUIRED: &str = "Reference is required";
const VERIFICATION_FAILED: &str = "Payment verification failed";

/// Normalized confirmation of a successful transaction
#[derive(Debug, Serialize)]
pub struct VerifiedPayment {
    pub reference: String,
    /// Major currency units
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<String>,
    pub customer: Customer,
    pub metadata: Value,
}

pub fn to_major_units(amount: u64) -> f64 {
    amount as f64 / 100.0
}

/// Checks the transaction against the gateway.
///
/// Only an answer with both the envelope `status` set and the transaction status equal to
/// `success` counts as a verified payment, everything else is [RelayError::VerificationFailed].
pub async fn verify_payment(
    gateway: &dyn Gateway,
    config: &Config,
    reference: Option<&str>,
) -> Result<VerifiedPayment> {
    let Some(reference) = reference.filter(|r| !r.trim().is_empty()) else {
        return Err(RelayError::validation(REFERENCE_REQUIRED));
    };

    let Some(secret) = config.secret_key.as_ref() else {
        tracing::error!("PAYSTACK_SECRET_KEY is not set");
        return Err(RelayError::Configuration);
    };

    let response = gateway
        .verify_transaction(secret, reference)
        .await
        .map_err(|e| {
            tracing::error!(reference, "Failed to verify payment: {e}");
            RelayError::from_gateway(e, VERIFICATION_FAILED)
        })?;

    let accepted = response.get("status").and_then(Value::as_bool).unwrap_or(false);
    let data = response.get("data").filter(|d| d.is_object());
    let transaction_status = data
        .and_then(|d| d.get("status"))
        .and_then(|s| TransactionStatus::deserialize(s).ok())
        .unwrap_or_default();

    let data = match data {
        Some(data) if accepted && transaction_status == TransactionStatus::Success => data,
        _ => {
            tracing::warn!(
                reference,
                accepted,
                ?transaction_status,
                "Payment verification failed"
            );
            return Err(RelayError::VerificationFailed);
        }
    };

    let transaction = VerifyData::deserialize(data).map_err(|e| {
        tracing::error!(reference, "Failed to decode verified transaction: {e}");
        RelayError::GatewayUnavailable {
            status: None,
            message: VERIFICATION_FAILED.to_owned(),
        }
    })?;
    let payment = VerifiedPayment::from(transaction);

    tracing::info!(
        reference = %payment.reference,
        amount = payment.amount,
        email = %EmailMask::mask(&payment.customer.email),
        metadata = %payment.metadata,
        "Payment successful"
    );

    Ok(payment)
}
