//! Published gateway endpoints and configuration keys

/// Hosted checkout pages
pub mod payment_urls {
    /// Sandbox checkout page
    pub const TEST: &str = "http://upperbox1.com:8082/pay";
    /// Production checkout page
    pub const LIVE: &str = "https://pay.firstchekout.com/pay";
}

/// Bespoke REST API paths, relative to [`BESPOKE_BASE_URI`](paths::BESPOKE_BASE_URI)
pub mod paths {
    /// Base URI for every bespoke service
    pub const BESPOKE_BASE_URI: &str = "https://bespoke.checkout.upltest.com/api/";

    pub const TEST_REQUERY: &str = "sandbox/transactions";
    pub const LIVE_REQUERY: &str = "transactions";

    pub const TEST_REVERSAL: &str = "sandbox/transactions/reversal";
    pub const LIVE_REVERSAL: &str = "transactions/reversal";

    pub const TEST_DIRECT_DEBIT: &str = "sandbox/transactions/direct/debit";
    pub const LIVE_DIRECT_DEBIT: &str = "transactions/direct/debit";

    /// Settlement confirmation has no sandbox counterpart
    pub const SETTLEMENT: &str = "transactions/settled";
}

/// Environment variables read by [`MerchantProfile::from_env`](crate::types::MerchantProfile::from_env)
pub mod env_vars {
    pub const TEST_SECRET: &str = "FIRSTCHEKOUT_MERCHANT_TEST_SECRET";
    pub const LIVE_SECRET: &str = "FIRSTCHEKOUT_MERCHANT_LIVE_SECRET";
    pub const CODE: &str = "FIRSTCHEKOUT_MERCHANT_CODE";
    pub const TEST_CALLBACK_URL: &str = "FIRSTCHEKOUT_TEST_CALLBACK_URL";
    pub const LIVE_CALLBACK_URL: &str = "FIRSTCHEKOUT_LIVE_CALLBACK_URL";
    pub const TEST_MODE: &str = "FIRST_CHEKOUT_TEST_MODE";

    /// Callback used when neither callback variable is set
    pub const DEFAULT_CALLBACK_URL: &str = "http://www.example.com/callback";
}

/// Currencies accepted by direct debit
pub mod currencies {
    /// Nigerian naira
    pub const NGN: &str = "NGN";

    /// Check if a currency code is accepted for direct debit
    pub fn is_supported(code: &str) -> bool {
        matches!(code, NGN)
    }
}

/// HTTP verbs the bespoke API accepts
pub const VALID_METHODS: [&str; 5] = ["GET", "POST", "PUT", "PATCH", "DELETE"];

/// Header carrying the active merchant secret
pub const API_KEY_HEADER: &str = "Api-Key";

/// Length of generated transaction references
pub const REFERENCE_LENGTH: usize = 11;
