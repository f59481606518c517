//! Cryptographic utilities for FirstChekout requests
//!
//! # Architecture
//!
//! - [`signature`] - SHA-512 request hash shared with the gateway
//! - [`reference`] - Random hashed tokens used as transaction references
//!
//! # Examples
//!
//! ```
//! use firstchekout::crypto::{generate_reference, sign};
//! use rust_decimal::Decimal;
//!
//! let without_amount = sign("TXN123", None, "secret", "M001");
//! let with_amount = sign("TXN123", Some(&Decimal::from(500)), "secret", "M001");
//!
//! assert_eq!(without_amount.len(), 128);
//! assert_ne!(without_amount, with_amount);
//! assert_eq!(generate_reference().len(), 11);
//! ```

pub mod reference;
pub mod signature;


pub use reference::{generate_hashed_token, generate_reference};
pub use signature::sign;
