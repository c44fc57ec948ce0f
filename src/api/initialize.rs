use reqwest::Url;
use serde::de::Error;

use crate::{
    api::{BudPayClient, auth, mask},
    config::PaymentConfig,
    error::{ErrorResponse, PaymentError, Result},
};

#[derive(Debug, serde::Serialize)]
struct InitializeRequest<'a> {
    reference: &'a str,
    amount: &'a str,
    currency: &'a str,
    redirect_url: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    firstname: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lastname: Option<&'a str>,
}

impl<'a> From<&'a PaymentConfig> for InitializeRequest<'a> {
    fn from(config: &'a PaymentConfig) -> Self {
        Self {
            reference: &config.reference,
            amount: &config.amount,
            currency: &config.currency,
            redirect_url: &config.redirect_url,
            email: &config.email,
            firstname: config.firstname.as_deref(),
            lastname: config.lastname.as_deref(),
        }
    }
}

/// Parsed initialize response. Fields beyond the authorization URL are
/// carried through opaquely.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct TransactionResult {
    pub data: TransactionData,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct TransactionData {
    pub authorization_url: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
enum InitializeResponse {
    #[serde(untagged)]
    Ok(TransactionResult),
    #[serde(untagged)]
    Err(ErrorResponse),
}

impl InitializeResponse {
    fn into_std_result(self) -> std::result::Result<TransactionResult, ErrorResponse> {
        match self {
            InitializeResponse::Ok(ok) => Ok(ok),
            InitializeResponse::Err(e) => Err(e),
        }
    }
}

impl BudPayClient {
    /// Creates a hosted-payment transaction and returns the checkout page
    /// URL the user must be sent to.
    ///
    /// One authenticated POST to `/transaction/initialize`; no retries.
    pub async fn create_payment(&self, config: &PaymentConfig) -> Result<Url> {
        let request = InitializeRequest::from(config);
        let url = self.endpoint("transaction/initialize")?;
        let payload = serde_json::to_value(&request).map_err(PaymentError::Serialization)?;
        tracing::debug!(%url, data = %mask::secure_value(&payload), "initialize transaction request");
        let res = match self
            .client
            .post(url)
            .headers(auth::authenticated_headers(&self.secret_key))
            .json(&payload)
            .send()
            .await
        {
            Ok(res) => res,
            Err(e) => {
                tracing::error!("initialize transaction request failed: {e}");
                return Err(e.into());
            }
        };
        let status = res.status();
        let response = res.json::<serde_json::Value>().await?;
        tracing::debug!(%status, data = %mask::secure_value(&response), "initialize transaction response");
        let res: InitializeResponse = serde_json::from_value(response)?;
        let result = res.into_std_result()?;
        Url::parse(&result.data.authorization_url).map_err(|_| {
            PaymentError::InvalidResponse(serde_json::Error::custom(
                "authorization_url is not a valid url",
            ))
        })
    }
}
