use std::{fmt, time::Duration};

use anyhow::Context;

const DEFAULT_BASE_URL: &str = "https://api.paystack.co";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_PORT: u16 = 3000;

/// Gateway secret key. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(***)")
    }
}

/// Runtime configuration, loaded once at startup and shared through [crate::state::AppState]
#[derive(Debug, Clone)]
pub struct Config {
    /// Missing key is not a startup failure: handlers answer with a configuration error instead
    pub secret_key: Option<SecretKey>,
    pub base_url: reqwest::Url,
    pub timeout: Duration,
    pub callback_url: Option<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let secret_key = non_empty_var("PAYSTACK_SECRET_KEY").map(SecretKey::new);
        if secret_key.is_none() {
            tracing::warn!("PAYSTACK_SECRET_KEY is not set, payment endpoints will be unavailable");
        }

        let base_url = match non_empty_var("PAYSTACK_BASE_URL") {
            Some(url) => parse_base_url(&url)?,
            None => parse_base_url(DEFAULT_BASE_URL)?,
        };

        let timeout = match non_empty_var("GATEWAY_TIMEOUT_SECS") {
            Some(secs) => parse_timeout(&secs)?,
            None => DEFAULT_TIMEOUT,
        };

        let port = match non_empty_var("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT is not a valid port: {port}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            secret_key,
            base_url,
            timeout,
            callback_url: non_empty_var("CALLBACK_URL"),
            port,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_timeout(secs: &str) -> anyhow::Result<Duration> {
    let secs: u64 = secs
        .parse()
        .with_context(|| format!("GATEWAY_TIMEOUT_SECS is not a number: {secs}"))?;
    anyhow::ensure!(secs > 0, "GATEWAY_TIMEOUT_SECS must be greater than zero");
    Ok(Duration::from_secs(secs))
}

pub fn parse_base_url(url: &str) -> anyhow::Result<reqwest::Url> {
    let url = reqwest::Url::parse(url).with_context(|| format!("invalid gateway url: {url}"))?;
    anyhow::ensure!(
        !url.cannot_be_a_base(),
        "gateway url cannot be used as a base: {url}"
    );
    Ok(url)
}

#[cfg(test)]
impl Config {
    pub fn for_tests(secret_key: Option<&str>, base_url: &str) -> Self {
        Self {
            secret_key: secret_key.map(SecretKey::new),
            base_url: parse_base_url(base_url).expect("valid test url"),
            timeout: DEFAULT_TIMEOUT,
            callback_url: None,
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_key_debug_is_redacted() {
        let key = SecretKey::new("sk_live_very_secret");
        assert_eq!(format!("{key:?}"), "SecretKey(***)");
        assert_eq!(key.expose(), "sk_live_very_secret");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("soon").is_err());
        assert_eq!(parse_timeout("45").unwrap(), Duration::from_secs(45));
    }

    #[test]
    fn rejects_non_base_urls() {
        assert!(parse_base_url("mailto:ops@example.com").is_err());
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("https://api.paystack.co").is_ok());
    }
}
