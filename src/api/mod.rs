use reqwest::Url;

use crate::error::{PaymentError, Result};

mod auth;
mod initialize;
/// Secret and PII masking for diagnostic log payloads
pub(crate) mod mask;
#[cfg(test)]
pub(crate) mod stub;
mod verify;

pub use initialize::{TransactionData, TransactionResult};

/// Client for the BudPay transaction API.
///
/// Holds the caller's secret credential and a connection pool. Cheap to
/// construct, so callers may build one per payment attempt.
#[derive(Debug, Clone)]
pub struct BudPayClient {
    secret_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl BudPayClient {
    pub const BASE_URL: &str = "https://api.budpay.com/api/v2";

    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::with_base_url(secret_key, Self::BASE_URL)
    }

    /// Targets another API host, e.g. a sandbox environment.
    pub fn with_base_url(secret_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        Url::parse(&url).map_err(|_| PaymentError::MalformedRequest(url))
    }
}
