use axum::http::HeaderMap;
use axum_extra::headers::{self, HeaderMapExt};

use crate::{config::SecretKey, gateway::error::GatewayError};

pub fn authenticated_headers(secret: &SecretKey) -> Result<HeaderMap, GatewayError> {
    let bearer = headers::Authorization::bearer(secret.expose())
        .map_err(|_| GatewayError::InvalidCredential)?;
    let mut map = HeaderMap::new();
    map.typed_insert(bearer);
    map.typed_insert(headers::ContentType::json());
    Ok(map)
}
