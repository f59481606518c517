//! # FirstChekout Rust Client
//!
//! A merchant-side client for the FirstChekout payment gateway.
//!
//! ## Features
//!
//! - **Hosted checkout forms**: Render the pre-filled HTML form the customer's browser posts to the gateway
//! - **Request signing**: SHA-512 hashes over reference, amount, merchant secret and merchant code
//! - **Bespoke API**: Re-query, direct debit, reversal and settlement confirmation
//! - **Test/live resolution**: One flag selects every credential and endpoint, once, at construction
//! - **Typed errors**: Validation, mode, remote and transport failures are distinct kinds
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use firstchekout::{CheckoutOptions, FirstChekoutClient, MerchantProfile};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let profile = MerchantProfile::new("test_sk", "live_sk", "M001")
//!         .with_test_callback_url("https://shop.example.ng/callback");
//!     let client = FirstChekoutClient::from_profile(profile)?;
//!
//!     // Render a checkout form
//!     let form = client.form(
//!         &CheckoutOptions::new()
//!             .with_amount(Decimal::from(5000))
//!             .with_description("Order #1024")
//!             .with_email("ada@example.com"),
//!     );
//!     println!("{}", form);
//!
//!     // Confirm the transaction later
//!     let status = client.re_query("TXN123").await?;
//!     println!("{}", status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`types`**: Merchant profile, endpoints, resolved configuration, request types
//! - **`crypto`**: Request signatures and transaction reference generation
//! - **`client`**: The client, its dispatcher, form builder and input validation
//! - **`error`**: Error taxonomy

pub mod client;
pub mod crypto;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use client::FirstChekoutClient;
pub use error::{FirstChekoutError, Result, UnknownProblem};
pub use types::*;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
