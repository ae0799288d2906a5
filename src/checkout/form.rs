use axum::{response::Html, routing::get};

use crate::state::AppState;

const PAYMENT_FORM: &str = include_str!("../../static/index.html");
const PAYMENT_CALLBACK: &str = include_str!("../../static/callback.html");

async fn payment_form() -> Html<&'static str> {
    Html(PAYMENT_FORM)
}

/// Page the gateway sends the browser back to once the customer leaves the hosted checkout
async fn payment_callback() -> Html<&'static str> {
    Html(PAYMENT_CALLBACK)
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", get(payment_form))
        .route("/payment/callback", get(payment_callback))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use super::*;
    use crate::{config::Config, gateway::testing::MockGateway};

    #[tokio::test]
    async fn serves_both_pages() {
        let state = AppState::new(
            Arc::new(MockGateway::default()),
            Config::for_tests(None, "https://api.paystack.co"),
        );
        for (uri, marker) in [
            ("/", "/api/initialize-payment"),
            ("/payment/callback", "/api/verify-payment"),
        ] {
            let response = router()
                .with_state(state.clone())
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert!(response.status().is_success());
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert!(String::from_utf8_lossy(&body).contains(marker), "{uri}");
        }
    }
}
