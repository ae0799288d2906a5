use std::sync::Mutex;

use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::{
    config::SecretKey,
    gateway::{Gateway, Result, error::GatewayError, initialize::InitializeRequest},
};

/// Canned gateway behaviour
#[derive(Debug, Clone)]
pub enum Reply {
    Body(Value),
    Status(StatusCode, Option<String>),
    Timeout,
}

impl Reply {
    fn produce(&self) -> Result<Value> {
        match self {
            Reply::Body(value) => Ok(value.clone()),
            Reply::Status(status, message) => Err(GatewayError::GatewayStatus {
                status: *status,
                message: message.clone(),
            }),
            Reply::Timeout => Err(GatewayError::Timeout),
        }
    }
}

/// In-memory [Gateway] that records every call it receives
#[derive(Debug)]
pub struct MockGateway {
    initialize_reply: Reply,
    verify_reply: Reply,
    pub initialized: Mutex<Vec<Value>>,
    pub verified: Mutex<Vec<String>>,
}

impl MockGateway {
    pub fn new(initialize_reply: Reply, verify_reply: Reply) -> Self {
        Self {
            initialize_reply,
            verify_reply,
            initialized: Mutex::default(),
            verified: Mutex::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.initialized.lock().unwrap().len() + self.verified.lock().unwrap().len()
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new(
            Reply::Body(initialized_body()),
            Reply::Body(verified_body(true, "success", 3_500_000)),
        )
    }
}

pub fn initialized_body() -> Value {
    json!({
        "status": true,
        "message": "Authorization URL created",
        "data": {
            "authorization_url": "https://checkout.paystack.com/0peioxfhpn",
            "access_code": "0peioxfhpn",
            "reference": "abc123"
        }
    })
}

pub fn verified_body(outer: bool, inner: &str, amount: u64) -> Value {
    json!({
        "status": outer,
        "message": "Verification successful",
        "data": {
            "id": 4099260516u64,
            "status": inner,
            "reference": "abc123",
            "amount": amount,
            "currency": "NGN",
            "channel": "card",
            "paid_at": "2024-08-22T09:15:02.000Z",
            "gateway_response": "Successful",
            "metadata": { "firstName": "John", "lastName": "Doe", "course": "Web Development" },
            "customer": { "id": 181873746, "email": "john@x.com", "first_name": null, "last_name": null },
            "authorization": { "authorization_code": "AUTH_uh8bcl3zbn", "last4": "4081" }
        }
    })
}

#[async_trait::async_trait]
impl Gateway for MockGateway {
    async fn initialize_transaction(
        &self,
        _secret: &SecretKey,
        request: &InitializeRequest<'_>,
    ) -> Result<Value> {
        self.initialized
            .lock()
            .unwrap()
            .push(serde_json::to_value(request).unwrap());
        self.initialize_reply.produce()
    }

    async fn verify_transaction(&self, _secret: &SecretKey, reference: &str) -> Result<Value> {
        self.verified.lock().unwrap().push(reference.to_owned());
        self.verify_reply.produce()
    }
}
