use reqwest::Url;

use crate::error::{PaymentError, Result};

/// Currency used when the caller does not pick one.
pub const DEFAULT_CURRENCY: &str = "NGN";

/// Everything a single payment attempt needs to know.
///
/// Validated on construction and immutable afterwards. Each attempt works on
/// its own clone, so two in-flight payments never share state.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub(crate) reference: String,
    pub(crate) amount: String,
    pub(crate) currency: String,
    pub(crate) redirect_url: String,
    pub(crate) email: String,
    pub(crate) firstname: Option<String>,
    pub(crate) lastname: Option<String>,
}

impl PaymentConfig {
    /// Builds a config with the default currency and no customer name.
    ///
    /// `reference` is the caller-generated identifier correlating the
    /// initialize and verify calls; it must be non-empty and unique per
    /// attempt. `amount` must be a positive decimal string and
    /// `redirect_url` an absolute URL.
    pub fn new(
        reference: impl Into<String>,
        amount: impl Into<String>,
        redirect_url: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self> {
        let reference = reference.into();
        let amount = amount.into();
        let redirect_url = redirect_url.into();
        if reference.trim().is_empty() {
            return Err(PaymentError::InvalidConfig(
                "transaction reference is empty".to_string(),
            ));
        }
        match amount.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => {}
            _ => {
                return Err(PaymentError::InvalidConfig(format!(
                    "amount {amount:?} is not a positive decimal string"
                )));
            }
        }
        if let Err(e) = Url::parse(&redirect_url) {
            return Err(PaymentError::InvalidConfig(format!(
                "redirect url {redirect_url:?} is not an absolute url: {e}"
            )));
        }
        Ok(Self {
            reference,
            amount,
            currency: DEFAULT_CURRENCY.to_string(),
            redirect_url,
            email: email.into(),
            firstname: None,
            lastname: None,
        })
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn customer(mut self, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        self.firstname = Some(firstname.into());
        self.lastname = Some(lastname.into());
        self
    }

    /// The caller-supplied transaction reference.
    pub fn reference(&self) -> &str {
        &self.reference
    }
}
