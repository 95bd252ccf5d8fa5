//! Tezos ed25519 keypair.

use ed25519_dalek::SigningKey;

use super::Address;

/// Base58Check prefix that renders a 64-byte ed25519 secret key as `edsk`.
const EDSK_PREFIX: [u8; 4] = [43, 246, 78, 7];

/// Represents a Tezos keypair (ed25519 signing key + derived address).
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
    address: Address,
}

impl Keypair {
    /// Builds a keypair from a 32-byte ed25519 seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(&seed);
        let address = Address::from_public_key(signing_key.verifying_key().as_bytes());

        Self {
            signing_key,
            address,
        }
    }

    /// Returns the secret key in the `edsk...` form wallets import.
    ///
    /// The encoded payload is the 64-byte keypair (seed followed by public key).
    pub fn secret_key_b58check(&self) -> String {
        b58check(&EDSK_PREFIX, &self.signing_key.to_keypair_bytes())
    }

    /// Returns the raw public key bytes.
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Returns a reference to the derived address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

fn b58check(prefix: &[u8], data: &[u8]) -> String {
    let mut payload = Vec::with_capacity(prefix.len() + data.len());
    payload.extend_from_slice(prefix);
    payload.extend_from_slice(data);
    bs58::encode(payload).with_check().into_string()
}
