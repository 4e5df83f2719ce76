use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rust_decimal::Decimal;
use sha2::{Digest, Sha256};

use crate::domain::shared::value_objects::UserId;

/// The buyer profile the checkout protocol consumes.
///
/// Loaded by the calling layer (it is the session's profile document); the
/// engine never fetches it. The checkout PIN is a secondary credential,
/// distinct from login credentials, stored only as a hash.
#[derive(Debug, Clone)]
pub struct Buyer {
    pub user_id: UserId,
    pub email: String,
    pub restaurant_name: String,
    pub points_balance: Decimal,
    pub checkout_pin_hash: Option<String>,
}

impl Buyer {
    /// Hashes a checkout PIN the way profiles store it: SHA-256, base64.
    pub fn hash_checkout_pin(pin: &str) -> String {
        BASE64.encode(Sha256::digest(pin.as_bytes()))
    }

    pub fn has_checkout_pin(&self) -> bool {
        self.checkout_pin_hash.is_some()
    }

    /// Verifies a checkout PIN attempt. Always false when no PIN is
    /// configured.
    pub fn verify_checkout_pin(&self, pin: &str) -> bool {
        self.checkout_pin_hash
            .as_deref()
            .is_some_and(|hash| hash == Self::hash_checkout_pin(pin))
    }
}
