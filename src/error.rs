use std::fmt::Display;

use reqwest::Url;
use serde::de::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

/// Rejection body the transaction API answers with instead of its usual
/// `data` envelope.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub status: bool,
    pub message: String,
}

#[derive(Debug)]
pub enum PaymentError {
    /// A [`PaymentConfig`](crate::PaymentConfig) invariant does not hold.
    InvalidConfig(String),
    /// The endpoint URL could not be constructed.
    MalformedRequest(String),
    /// The request payload could not be encoded.
    Serialization(serde_json::Error),
    /// The response body is absent, malformed, or missing expected fields.
    InvalidResponse(serde_json::Error),
    /// Network-level failure, passed through unmodified.
    Transport(reqwest::Error),
    /// The API rejected the request.
    Api(ErrorResponse),
    /// The redirect callback is unusable: no parseable query, no status, or
    /// no reference on a successful outcome.
    InvalidCallback(&'static str),
    /// The redirect callback reported a non-success status.
    PaymentNotSuccessful { status: String },
    /// The host's URL opener could not open the authorization URL.
    CannotOpenUrl(Url),
}

impl From<reqwest::Error> for PaymentError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            return Self::InvalidResponse(serde_json::Error::custom(
                "failed to decode response body",
            ));
        }
        Self::Transport(value)
    }
}

impl From<serde_json::Error> for PaymentError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidResponse(value)
    }
}

impl From<ErrorResponse> for PaymentError {
    fn from(value: ErrorResponse) -> Self {
        Self::Api(value)
    }
}

impl std::error::Error for PaymentError {}

impl Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentError::InvalidConfig(reason) => write!(f, "invalid payment config: {reason}"),
            PaymentError::MalformedRequest(url) => write!(f, "malformed request url: {url}"),
            PaymentError::Serialization(e) => write!(f, "request serialization: {e}"),
            PaymentError::InvalidResponse(e) => write!(f, "invalid api response: {e}"),
            PaymentError::Transport(e) => write!(f, "http request error: {e}"),
            PaymentError::Api(response) => write!(f, "api error: {}", response.message),
            PaymentError::InvalidCallback(reason) => {
                write!(f, "invalid redirect callback: {reason}")
            }
            PaymentError::PaymentNotSuccessful { status } => {
                write!(f, "payment not successful: status is {status:?}")
            }
            PaymentError::CannotOpenUrl(url) => write!(f, "cannot open authorization url: {url}"),
        }
    }
}
