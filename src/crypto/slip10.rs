//! SLIP-10 key derivation for ed25519.
//!
//! ed25519 only supports hardened children, so every path segment must be
//! hardened (`'`).

use ed25519_dalek_bip32::{DerivationPath, ExtendedSigningKey};

use crate::error::CollaboratorError;

/// The path Tezos wallets derive their first account on.
pub const TEZOS_DERIVATION_PATH: &str = "m/44'/1729'/0'/0'";

/// Walks `path` from the master node of `seed`.
pub fn derive_path(seed: &[u8], path: &str) -> Result<ExtendedSigningKey, CollaboratorError> {
    let path: DerivationPath = path
        .parse()
        .map_err(|e| CollaboratorError::KeyDerivation(format!("bad path {}: {}", path, e)))?;

    ExtendedSigningKey::from_seed(seed)
        .and_then(|master| master.derive(&path))
        .map_err(|e| CollaboratorError::KeyDerivation(e.to_string()))
}
