//! Cryptographic operations for Tezos key and address generation.
//!
//! This module provides:
//! - SLIP-10 ed25519 derivation from a BIP39 seed (via `ed25519-dalek-bip32`)
//! - `tz1` address derivation using BLAKE2b-160
//! - Base58Check encoding of addresses and secret keys

mod address;
mod keypair;
mod slip10;

pub use address::Address;
pub use keypair::Keypair;
pub use slip10::{derive_path, TEZOS_DERIVATION_PATH};
