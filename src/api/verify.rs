use serde::de::Error;

use crate::{
    api::{BudPayClient, auth, mask},
    error::{PaymentError, Result},
};

impl BudPayClient {
    /// Fetches the provider's record of a transaction by its reference.
    ///
    /// The response body is handed back verbatim; callers inspect the
    /// fields they care about. A repeated call for the same reference
    /// simply repeats the remote check.
    pub async fn verify_payment(
        &self,
        transaction_id: &str,
    ) -> Result<serde_json::Map<String, serde_json::Value>> {
        let url = self.endpoint(&format!("transaction/verify/{transaction_id}"))?;
        tracing::debug!(%url, "verify transaction request");
        let res = match self
            .client
            .get(url)
            .headers(auth::authenticated_headers(&self.secret_key))
            .send()
            .await
        {
            Ok(res) => res,
            Err(e) => {
                tracing::error!("verify transaction request failed: {e}");
                return Err(e.into());
            }
        };
        let status = res.status();
        let response = res.json::<serde_json::Value>().await?;
        tracing::debug!(%status, data = %mask::secure_value(&response), "verify transaction response");
        match response {
            serde_json::Value::Object(map) => Ok(map),
            _ => Err(PaymentError::InvalidResponse(serde_json::Error::custom(
                "verify response is not a json object",
            ))),
        }
    }
}
