//! This crate is split in 4 main modules:
//!
//! - [config] (what a payment attempt looks like)
//! - [BudPayClient] (the transaction API calls)
//! - [redirect] (callback parsing and verification)
//! - [handler] (orchestration with an observable loading flag)
#![doc = include_str!("../README.md")]

mod api;
pub mod config;
mod error;
/// Payment orchestration: start a payment, observe the loading flag, hand
/// the checkout URL to the platform's opener
pub mod handler;
/// Redirect callback parsing and transaction verification
pub mod redirect;

pub use api::{BudPayClient, TransactionData, TransactionResult};
pub use config::PaymentConfig;
pub use error::{ErrorResponse, PaymentError, Result};
pub use handler::{PaymentHandler, UrlOpener};
pub use redirect::{RedirectOutcome, handle_redirect_url};
pub use reqwest::Url;
