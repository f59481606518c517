//! Gateway endpoint configuration and the mode-resolved view used by the client

use super::constants::{paths, payment_urls};
use super::merchant::{MerchantProfile, Mode};
use crate::{FirstChekoutError, Result};
use std::time::Duration;

/// Every URL and path the client talks to, for both sandbox and production
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayEndpoints {
    pub test_payment_url: String,
    pub live_payment_url: String,
    /// Base URI for the bespoke REST API, shared by both modes
    pub bespoke_base_uri: String,
    pub test_requery_path: String,
    pub live_requery_path: String,
    pub test_reversal_path: String,
    pub live_reversal_path: String,
    pub test_direct_debit_path: String,
    pub live_direct_debit_path: String,
    pub settlement_path: String,
}

impl Default for GatewayEndpoints {
    fn default() -> Self {
        Self {
            test_payment_url: payment_urls::TEST.to_string(),
            live_payment_url: payment_urls::LIVE.to_string(),
            bespoke_base_uri: paths::BESPOKE_BASE_URI.to_string(),
            test_requery_path: paths::TEST_REQUERY.to_string(),
            live_requery_path: paths::LIVE_REQUERY.to_string(),
            test_reversal_path: paths::TEST_REVERSAL.to_string(),
            live_reversal_path: paths::LIVE_REVERSAL.to_string(),
            test_direct_debit_path: paths::TEST_DIRECT_DEBIT.to_string(),
            live_direct_debit_path: paths::LIVE_DIRECT_DEBIT.to_string(),
            settlement_path: paths::SETTLEMENT.to_string(),
        }
    }
}

impl GatewayEndpoints {
    /// Point the bespoke API at a different host
    pub fn with_bespoke_base_uri(mut self, uri: impl Into<String>) -> Self {
        self.bespoke_base_uri = uri.into();
        self
    }

    /// Override both checkout page URLs
    pub fn with_payment_urls(mut self, test: impl Into<String>, live: impl Into<String>) -> Self {
        self.test_payment_url = test.into();
        self.live_payment_url = live.into();
        self
    }

    /// Validate the endpoint configuration
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("bespoke base URI", &self.bespoke_base_uri),
            ("test payment URL", &self.test_payment_url),
            ("live payment URL", &self.live_payment_url),
        ] {
            if url.is_empty() {
                return Err(FirstChekoutError::config(format!("{} cannot be empty", name)));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(FirstChekoutError::config(format!(
                    "{} must start with http:// or https://",
                    name
                )));
            }
        }

        url::Url::parse(&self.bespoke_base_uri)?;
        Ok(())
    }
}

/// Client configuration: credentials, endpoints and transport settings
#[derive(Debug, Clone)]
pub struct FirstChekoutConfig {
    pub profile: MerchantProfile,
    pub endpoints: GatewayEndpoints,
    /// Request timeout; `None` keeps the HTTP client's default
    pub timeout: Option<Duration>,
}

impl FirstChekoutConfig {
    /// Create a config using the gateway's published endpoints
    pub fn new(profile: MerchantProfile) -> Self {
        Self {
            profile,
            endpoints: GatewayEndpoints::default(),
            timeout: None,
        }
    }

    /// Create a config from the process environment
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(MerchantProfile::from_env()?))
    }

    /// Set the gateway endpoints
    pub fn with_endpoints(mut self, endpoints: GatewayEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.endpoints.validate()
    }

    /// Resolve the active side of the configuration
    pub fn resolve(&self) -> ResolvedConfig {
        ResolvedConfig::resolve(&self.profile, &self.endpoints)
    }
}

/// The single set of values the client uses, fixed at construction
///
/// Every field comes from the same side (test or live) of the profile and endpoints.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub mode: Mode,
    pub active_secret: String,
    pub merchant_code: String,
    pub active_callback_url: String,
    pub active_payment_url: String,
    /// Always ends with `/` so relative paths join beneath it
    pub bespoke_base_uri: String,
    pub active_requery_path: String,
    pub active_reversal_path: String,
    pub active_direct_debit_path: String,
    pub settlement_path: String,
}

impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("mode", &self.mode)
            .field("active_secret", &"<redacted>")
            .field("merchant_code", &self.merchant_code)
            .field("active_callback_url", &self.active_callback_url)
            .field("active_payment_url", &self.active_payment_url)
            .field("bespoke_base_uri", &self.bespoke_base_uri)
            .field("active_requery_path", &self.active_requery_path)
            .field("active_reversal_path", &self.active_reversal_path)
            .field("active_direct_debit_path", &self.active_direct_debit_path)
            .field("settlement_path", &self.settlement_path)
            .finish()
    }
}

impl ResolvedConfig {
    /// Select the active credentials and endpoints for the profile's mode
    pub fn resolve(profile: &MerchantProfile, endpoints: &GatewayEndpoints) -> Self {
        let mode = profile.mode();
        let pick = |test: &String, live: &String| mode.select(test, live).clone();

        let mut bespoke_base_uri = endpoints.bespoke_base_uri.clone();
        if !bespoke_base_uri.ends_with('/') {
            bespoke_base_uri.push('/');
        }

        Self {
            mode,
            active_secret: pick(&profile.test_secret, &profile.live_secret),
            merchant_code: profile.code.clone(),
            active_callback_url: pick(&profile.test_callback_url, &profile.live_callback_url),
            active_payment_url: pick(&endpoints.test_payment_url, &endpoints.live_payment_url),
            bespoke_base_uri,
            active_requery_path: pick(&endpoints.test_requery_path, &endpoints.live_requery_path),
            active_reversal_path: pick(
                &endpoints.test_reversal_path,
                &endpoints.live_reversal_path,
            ),
            active_direct_debit_path: pick(
                &endpoints.test_direct_debit_path,
                &endpoints.live_direct_debit_path,
            ),
            settlement_path: endpoints.settlement_path.clone(),
        }
    }

    pub fn is_test_mode(&self) -> bool {
        self.mode.is_test()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(test_mode: bool) -> MerchantProfile {
        MerchantProfile::new("test-secret", "live-secret", "M001")
            .with_test_callback_url("https://merchant.test/callback")
            .with_live_callback_url("https://merchant.live/callback")
            .with_test_mode(test_mode)
    }

    #[test]
    fn test_resolve_test_mode_selects_only_test_values() {
        let resolved = ResolvedConfig::resolve(&profile(true), &GatewayEndpoints::default());

        assert_eq!(resolved.mode, Mode::Test);
        assert_eq!(resolved.active_secret, "test-secret");
        assert_eq!(resolved.active_callback_url, "https://merchant.test/callback");
        assert_eq!(resolved.active_payment_url, payment_urls::TEST);
        assert_eq!(resolved.active_requery_path, paths::TEST_REQUERY);
        assert_eq!(resolved.active_reversal_path, paths::TEST_REVERSAL);
        assert_eq!(resolved.active_direct_debit_path, paths::TEST_DIRECT_DEBIT);
        assert_eq!(resolved.merchant_code, "M001");
    }

    #[test]
    fn test_resolve_live_mode_selects_only_live_values() {
        let resolved = ResolvedConfig::resolve(&profile(false), &GatewayEndpoints::default());

        assert_eq!(resolved.mode, Mode::Live);
        assert_eq!(resolved.active_secret, "live-secret");
        assert_eq!(resolved.active_callback_url, "https://merchant.live/callback");
        assert_eq!(resolved.active_payment_url, payment_urls::LIVE);
        assert_eq!(resolved.active_requery_path, paths::LIVE_REQUERY);
        assert_eq!(resolved.active_reversal_path, paths::LIVE_REVERSAL);
        assert_eq!(resolved.active_direct_debit_path, paths::LIVE_DIRECT_DEBIT);
        assert_eq!(resolved.settlement_path, paths::SETTLEMENT);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let endpoints = GatewayEndpoints::default();
        let first = ResolvedConfig::resolve(&profile(true), &endpoints);
        let second = ResolvedConfig::resolve(&profile(true), &endpoints);
        assert_eq!(first, second);
    }

    #[test]
    fn test_base_uri_gets_trailing_slash() {
        let endpoints = GatewayEndpoints::default().with_bespoke_base_uri("http://127.0.0.1:9000");
        let resolved = ResolvedConfig::resolve(&profile(true), &endpoints);
        assert_eq!(resolved.bespoke_base_uri, "http://127.0.0.1:9000/");
    }

    #[test]
    fn test_endpoints_validation() {
        assert!(GatewayEndpoints::default().validate().is_ok());

        let err = GatewayEndpoints::default()
            .with_bespoke_base_uri("")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));

        let err = GatewayEndpoints::default()
            .with_payment_urls("ftp://sandbox", "https://pay.firstchekout.com/pay")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("must start with http://"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let resolved = ResolvedConfig::resolve(&profile(false), &GatewayEndpoints::default());
        assert!(!format!("{:?}", resolved).contains("live-secret"));
    }
}
