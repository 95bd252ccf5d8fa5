//! Tezos `tz1` address representation.

use std::fmt;

use blake2::digest::consts::U20;
use blake2::{Blake2b, Digest};

type Blake2b160 = Blake2b<U20>;

/// Base58Check prefix that renders as `tz1`.
const TZ1_PREFIX: [u8; 3] = [6, 161, 159];

/// An ed25519 implicit account address (20-byte public key hash).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Creates an address from raw hash bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Derives the address of an ed25519 public key.
    ///
    /// The address is the BLAKE2b-160 digest of the 32 public key bytes.
    pub fn from_public_key(public_key: &[u8; 32]) -> Self {
        let digest = Blake2b160::digest(public_key);
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Returns the Base58Check `tz1...` form.
    pub fn to_b58check(&self) -> String {
        let mut payload = Vec::with_capacity(TZ1_PREFIX.len() + self.0.len());
        payload.extend_from_slice(&TZ1_PREFIX);
        payload.extend_from_slice(&self.0);
        bs58::encode(payload).with_check().into_string()
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_b58check())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_b58check())
    }
}
