use reqwest::Url;

use crate::{
    api::BudPayClient,
    error::{PaymentError, Result},
};

/// The literal the hosted checkout page uses to signal success.
const SUCCESS_STATUS: &str = "success";

/// Outcome data the hosted checkout page carries back as query parameters
/// on the redirect callback.
#[derive(Debug)]
pub struct RedirectOutcome {
    pub status: String,
    pub reference: Option<String>,
}

impl RedirectOutcome {
    /// Extracts `status` and `reference` from a callback URL.
    pub fn from_url(url: &Url) -> Result<Self> {
        if url.query().is_none() {
            return Err(PaymentError::InvalidCallback("no query component"));
        }
        let mut status = None;
        let mut reference = None;
        for (name, value) in url.query_pairs() {
            match name.as_ref() {
                "status" => status = Some(value.into_owned()),
                "reference" => reference = Some(value.into_owned()),
                _ => {}
            }
        }
        let Some(status) = status else {
            return Err(PaymentError::InvalidCallback("status parameter is missing"));
        };
        Ok(Self { status, reference })
    }

    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// Returns the transaction reference if the checkout reported success.
    pub fn require_success(self) -> Result<String> {
        if !self.is_success() {
            return Err(PaymentError::PaymentNotSuccessful {
                status: self.status,
            });
        }
        self.reference.ok_or(PaymentError::InvalidCallback(
            "reference parameter is missing",
        ))
    }
}

impl BudPayClient {
    /// Parses a redirect callback and, when it reports success, verifies
    /// the transaction with the API.
    ///
    /// No network call is made unless the callback carries
    /// `status=success` and a reference.
    pub async fn handle_redirect(
        &self,
        url: &str,
    ) -> Result<serde_json::Map<String, serde_json::Value>> {
        let url = Url::parse(url).map_err(|e| {
            tracing::warn!("redirect callback url did not parse: {e}");
            PaymentError::InvalidCallback("not a parseable absolute url")
        })?;
        let outcome = RedirectOutcome::from_url(&url)?;
        let reference = outcome.require_success()?;
        self.verify_payment(&reference).await
    }
}

/// One-shot form of [`BudPayClient::handle_redirect`] for hosts that do not
/// keep a client around: builds an ephemeral client from the secret.
pub async fn handle_redirect_url(
    url: &str,
    secret_key: &str,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    BudPayClient::new(secret_key).handle_redirect(url).await
}
