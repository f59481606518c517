//! Core types for the FirstChekout client
//!
//! # Architecture
//!
//! - [`merchant`] - Merchant credentials and the test/live [`Mode`]
//! - [`config`] - Gateway endpoints and the mode-resolved [`ResolvedConfig`]
//! - [`transaction`] - Per-call inputs: checkout options, direct debit, settlements
//! - [`envelope`] - The gateway's JSON response wrapper
//! - [`constants`] - Published URLs, paths and environment keys
//!
//! # Examples
//!
//! ```
//! use firstchekout::types::{GatewayEndpoints, MerchantProfile, Mode, ResolvedConfig};
//!
//! let profile = MerchantProfile::new("test_sk", "live_sk", "M001").with_test_mode(false);
//! let resolved = ResolvedConfig::resolve(&profile, &GatewayEndpoints::default());
//!
//! assert_eq!(resolved.mode, Mode::Live);
//! assert_eq!(resolved.active_secret, "live_sk");
//! ```

pub mod config;
pub mod constants;
pub mod envelope;
pub mod merchant;
pub mod transaction;

pub use config::{FirstChekoutConfig, GatewayEndpoints, ResolvedConfig};
pub use constants::{currencies, env_vars, paths, payment_urls};
pub use envelope::GatewayEnvelope;
pub use merchant::{MerchantProfile, Mode};
pub use transaction::{CheckoutOptions, DirectDebitRequest, FormSettings, SettlementQuery};
