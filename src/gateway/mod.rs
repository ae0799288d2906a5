use std::time::Duration;

use reqwest::Url;
use serde_json::Value;

use crate::{
    config::SecretKey,
    gateway::{auth::authenticated_headers, error::GatewayError},
};

mod auth;
pub mod error;
/// Type conversions between gateway payloads and checkout responses
mod from;
pub mod initialize;
/// Log payload masking
pub mod mask;
#[cfg(test)]
pub mod testing;
pub mod verify;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Envelope shared by every Paystack response
#[derive(Debug, serde::Deserialize)]
pub struct PaystackResponse<T> {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// Outbound side of the relay.
///
/// Both calls return the raw response body so the checkout layer decides what a successful
/// operation looks like. Non-2xx responses and transport failures come back as [GatewayError].
#[async_trait::async_trait]
pub trait Gateway: std::fmt::Debug + Send + Sync {
    async fn initialize_transaction(
        &self,
        secret: &SecretKey,
        request: &initialize::InitializeRequest<'_>,
    ) -> Result<Value>;

    async fn verify_transaction(&self, secret: &SecretKey, reference: &str) -> Result<Value>;
}

#[derive(Debug, Clone)]
pub struct PaystackGateway {
    client: reqwest::Client,
    base_url: Url,
}

impl PaystackGateway {
    pub fn new(base_url: Url, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Appends path segments to the base url, percent-encoding each of them
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::InvalidBaseUrl)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let res = request.send().await?;
        let status = res.status();
        let body = res.bytes().await?;

        if !status.is_success() {
            let response = serde_json::from_slice::<Value>(&body).ok();
            let message = response
                .as_ref()
                .and_then(|v| v.get("message"))
                .and_then(Value::as_str)
                .map(str::to_owned);
            tracing::debug!(
                %status,
                data = %response.as_ref().map(mask::secure_value).unwrap_or_default(),
                "Gateway API error response"
            );
            return Err(GatewayError::GatewayStatus { status, message });
        }

        let response = serde_json::from_slice::<Value>(&body)?;
        tracing::debug!(%status, data = %mask::secure_value(&response), "Gateway API response");
        Ok(response)
    }
}

#[async_trait::async_trait]
impl Gateway for PaystackGateway {
    async fn initialize_transaction(
        &self,
        secret: &SecretKey,
        request: &initialize::InitializeRequest<'_>,
    ) -> Result<Value> {
        let headers = authenticated_headers(secret)?;
        let url = self.endpoint(["transaction", "initialize"])?;
        tracing::debug!(%url, data = %mask::secure_serializable(request), "Gateway API initialize request");
        self.send(self.client.post(url).headers(headers).json(request))
            .await
    }

    async fn verify_transaction(&self, secret: &SecretKey, reference: &str) -> Result<Value> {
        let headers = authenticated_headers(secret)?;
        let url = self.endpoint(["transaction", "verify", reference])?;
        tracing::debug!(%url, "Gateway API verify request");
        self.send(self.client.get(url).headers(headers)).await
    }
}
