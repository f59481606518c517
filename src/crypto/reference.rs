//! Transaction reference generation

use crate::types::constants::REFERENCE_LENGTH;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generate a random hashed token of `length` lowercase hex characters
///
/// 32 bytes from the thread RNG are hashed with SHA-256, so lengths above 64 are capped.
pub fn generate_hashed_token(length: usize) -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    let mut token = hex::encode(Sha256::digest(bytes));
    token.truncate(length);
    token
}

/// Generate a transaction reference for a checkout form
pub fn generate_reference() -> String {
    generate_hashed_token(REFERENCE_LENGTH)
}
