//! FirstChekout merchant client
//!
//! The client resolves its credentials and endpoints once at construction and then
//! exposes the gateway operations:
//!
//! - [`FirstChekoutClient::form`] / [`FirstChekoutClient::raw`] - hosted checkout form
//! - [`FirstChekoutClient::re_query`] - confirm a transaction's status
//! - [`FirstChekoutClient::direct_debit`] - debit a consumer with a standing order
//! - [`FirstChekoutClient::reversal`] - reverse a successful transaction
//! - [`FirstChekoutClient::settlements`] - confirm settlement (live mode only)
//!
//! Each remote operation issues exactly one request through
//! [`FirstChekoutClient::dispatch`].
//!
//! # Examples
//!
//! ```no_run
//! use firstchekout::{FirstChekoutClient, FirstChekoutConfig, MerchantProfile};
//!
//! # async fn example() -> firstchekout::Result<()> {
//! let profile = MerchantProfile::new("test_sk", "live_sk", "M001");
//! let client = FirstChekoutClient::new(FirstChekoutConfig::new(profile))?;
//!
//! let status = client.re_query("TXN123").await?;
//! println!("Transaction status: {}", status);
//! # Ok(())
//! # }
//! ```

use crate::crypto::signature;
use crate::types::{
    DirectDebitRequest, FirstChekoutConfig, MerchantProfile, ResolvedConfig, SettlementQuery,
};
use crate::{FirstChekoutError, Result};
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use url::Url;

pub mod dispatch;
pub mod form;
pub mod validation;


pub use dispatch::parse_method;

/// Client for the FirstChekout gateway
#[derive(Debug, Clone)]
pub struct FirstChekoutClient {
    config: ResolvedConfig,
    base_url: Url,
    http: Client,
}

impl FirstChekoutClient {
    /// Create a new client, resolving test or live settings once
    pub fn new(config: FirstChekoutConfig) -> Result<Self> {
        config.validate()?;

        let resolved = config.resolve();
        let base_url = Url::parse(&resolved.bespoke_base_uri)?;

        let mut client_builder = Client::builder();
        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let http = client_builder
            .build()
            .map_err(|e| FirstChekoutError::config(format!("Failed to create HTTP client: {}", e)))?;

        tracing::debug!(
            "FirstChekout client ready in {} mode against {}",
            resolved.mode.as_str(),
            base_url
        );

        Ok(Self {
            config: resolved,
            base_url,
            http,
        })
    }

    /// Create a client from a profile with the published endpoints
    pub fn from_profile(profile: MerchantProfile) -> Result<Self> {
        Self::new(FirstChekoutConfig::new(profile))
    }

    /// Create a client from the process environment
    pub fn from_env() -> Result<Self> {
        Self::new(FirstChekoutConfig::from_env()?)
    }

    /// The resolved settings this client uses
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn is_test_mode(&self) -> bool {
        self.config.is_test_mode()
    }

    /// Sign a transaction with the active secret and merchant code
    pub fn sign(&self, reference: &str, amount: Option<&Decimal>) -> String {
        signature::sign(
            reference,
            amount,
            &self.config.active_secret,
            &self.config.merchant_code,
        )
    }

    /// Re-query the gateway to confirm a transaction's status
    pub async fn re_query(&self, reference: &str) -> Result<Value> {
        let hash = self.sign(reference, None);
        let path = format!(
            "{}/{}/{}/query/",
            self.config.active_requery_path, reference, hash
        );

        self.dispatch("GET", &path, None).await
    }

    /// Debit a consumer who has a standing order on the merchant's site
    ///
    /// The request is validated before anything is signed or sent.
    pub async fn direct_debit(&self, request: &DirectDebitRequest) -> Result<Value> {
        let (reference, amount) = validation::validate_direct_debit(request)?;

        let hash = self.sign(reference, Some(amount));
        let path = format!("{}/{}", self.config.active_direct_debit_path, hash);

        self.dispatch("POST", &path, Some(&json!(request))).await
    }

    /// Reverse a previously successful transaction
    pub async fn reversal(&self, reference: &str) -> Result<Value> {
        let hash = self.sign(reference, None);
        let path = format!(
            "{}/{}/{}",
            self.config.active_reversal_path, reference, hash
        );

        self.dispatch("POST", &path, None).await
    }

    /// Confirm whether transactions have been settled
    ///
    /// Only available in live mode; fails before any request is made otherwise.
    pub async fn settlements<I, S>(&self, references: I) -> Result<Value>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.merchant_must_be_live("settlements")?;

        let query = SettlementQuery {
            transaction_references: references.into_iter().map(Into::into).collect(),
        };

        self.dispatch("POST", &self.config.settlement_path, Some(&json!(query)))
            .await
    }

    fn merchant_must_be_live(&self, operation: &'static str) -> Result<()> {
        if self.config.is_test_mode() {
            tracing::debug!("Refusing {} in test mode", operation);
            return Err(FirstChekoutError::mode_restriction(operation));
        }
        Ok(())
    }
}
