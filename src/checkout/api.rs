use std::sync::Arc;

use axum::{
    extract::{FromRequest, FromRequestParts, State},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::{
    checkout::{
        RelayError, Result, initialize,
        verify::{self, VerifiedPayment},
    },
    config::Config,
    gateway::Gateway,
    state::AppState,
};

#[instrument(skip_all)]
pub async fn initialize_payment(
    State(gateway): State<Arc<dyn Gateway>>,
    State(config): State<Arc<Config>>,
    Json(request): Json<initialize::PaymentRequest>,
) -> Result<axum::Json<Value>> {
    let response = initialize::initialize_payment(gateway.as_ref(), &config, &request).await?;
    Ok(axum::Json(response))
}

#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    pub reference: Option<String>,
}

#[instrument(skip_all)]
pub async fn verify_payment(
    State(gateway): State<Arc<dyn Gateway>>,
    State(config): State<Arc<Config>>,
    Query(query): Query<VerifyQuery>,
) -> Result<axum::Json<VerifyResponse>> {
    let payment =
        verify::verify_payment(gateway.as_ref(), &config, query.reference.as_deref()).await?;
    Ok(axum::Json(VerifyResponse {
        status: true,
        message: "Payment verified successfully",
        data: payment,
    }))
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    status: bool,
    message: &'static str,
    data: VerifiedPayment,
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/api/initialize-payment", post(initialize_payment))
        .route("/api/verify-payment", get(verify_payment))
}

/// `Json` extractor wrapper that reports rejections as [RelayError::Validation]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: serde::de::DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = RelayError;

    async fn from_request(
        req: axum::http::Request<axum::body::Body>,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(e) => Err(RelayError::validation(e.body_text())),
        }
    }
}

/// `Query` extractor wrapper that reports rejections as [RelayError::Validation]
pub struct Query<T>(pub T);

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RelayError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        match axum::extract::Query::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Query(value)) => Ok(Self(value)),
            Err(e) => Err(RelayError::validation(e.body_text())),
        }
    }
}
