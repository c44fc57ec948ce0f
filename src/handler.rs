use std::sync::Arc;

use reqwest::Url;
use tokio::sync::watch;

use crate::{api::BudPayClient, config::PaymentConfig, error::PaymentError};

/// Platform capability that surfaces the hosted checkout page to the user,
/// e.g. by launching the system browser.
///
/// Returning `false` means the URL could not be opened; the handler reports
/// that to the caller as [`PaymentError::CannotOpenUrl`]. Any matching
/// closure qualifies.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &Url) -> bool;
}

impl<F> UrlOpener for F
where
    F: Fn(&Url) -> bool + Send + Sync,
{
    fn open(&self, url: &Url) -> bool {
        self(url)
    }
}

/// Drives a payment attempt: initialize the transaction, then hand the
/// authorization URL to the host's [`UrlOpener`].
///
/// The only externally observable state is the loading flag, exposed as a
/// [`watch`] channel so UI bindings can subscribe to it from any context.
#[derive(Clone)]
pub struct PaymentHandler {
    inner: Arc<Inner>,
}

struct Inner {
    config: PaymentConfig,
    secret_key: String,
    base_url: String,
    opener: Arc<dyn UrlOpener>,
    loading: watch::Sender<bool>,
}

impl PaymentHandler {
    pub fn new(
        config: PaymentConfig,
        secret_key: impl Into<String>,
        opener: Arc<dyn UrlOpener>,
    ) -> Self {
        Self::with_base_url(config, secret_key, BudPayClient::BASE_URL, opener)
    }

    /// Like [`PaymentHandler::new`], but against another API host.
    pub fn with_base_url(
        config: PaymentConfig,
        secret_key: impl Into<String>,
        base_url: impl Into<String>,
        opener: Arc<dyn UrlOpener>,
    ) -> Self {
        let (loading, _) = watch::channel(false);
        Self {
            inner: Arc::new(Inner {
                config,
                secret_key: secret_key.into(),
                base_url: base_url.into(),
                opener,
                loading,
            }),
        }
    }

    /// Current value of the loading flag.
    pub fn is_loading(&self) -> bool {
        *self.inner.loading.borrow()
    }

    /// Subscribes to loading flag changes.
    pub fn loading(&self) -> watch::Receiver<bool> {
        self.inner.loading.subscribe()
    }

    /// Starts a payment attempt. Must be called from within a tokio
    /// runtime.
    ///
    /// The loading flag flips on synchronously, the transaction is
    /// initialized in a background task, and the resulting authorization
    /// URL goes to the opener. The flag is reset before any outcome is
    /// delivered, on success and failure alike. A call while a previous
    /// attempt is still in flight is rejected and returns `false`.
    pub fn start_payment<F>(&self, on_error: F) -> bool
    where
        F: FnOnce(PaymentError) + Send + 'static,
    {
        let started = self.inner.loading.send_if_modified(|loading| {
            if *loading {
                false
            } else {
                *loading = true;
                true
            }
        });
        if !started {
            tracing::warn!("payment already in flight, ignoring start request");
            return false;
        }

        let client =
            BudPayClient::with_base_url(self.inner.secret_key.clone(), self.inner.base_url.clone());
        let config = self.inner.config.clone();
        let weak = Arc::downgrade(&self.inner);

        tokio::spawn(async move {
            let result = client.create_payment(&config).await;
            // The owner may be gone by the time the round trip resolves.
            let Some(inner) = weak.upgrade() else { return };
            inner.loading.send_replace(false);
            match result {
                Ok(url) => {
                    if inner.opener.open(&url) {
                        tracing::info!(%url, "opened hosted checkout page");
                    } else {
                        tracing::error!(%url, "url opener rejected the authorization url");
                        on_error(PaymentError::CannotOpenUrl(url));
                    }
                }
                Err(e) => {
                    tracing::error!("failed to create payment: {e}");
                    on_error(e);
                }
            }
        });
        true
    }
}
