//! Request signatures

use rust_decimal::Decimal;
use sha2::{Digest, Sha512};

/// Compute the SHA-512 request hash, hex encoded
///
/// The preimage is `reference + amount + secret + code`. When no amount is given it is
/// left out of the concatenation entirely; the gateway recomputes the same string.
pub fn sign(reference: &str, amount: Option<&Decimal>, secret: &str, code: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(reference.as_bytes());
    if let Some(amount) = amount {
        hasher.update(amount.to_string().as_bytes());
    }
    hasher.update(secret.as_bytes());
    hasher.update(code.as_bytes());
    hex::encode(hasher.finalize())
}
