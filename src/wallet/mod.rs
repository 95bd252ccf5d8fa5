//! Wallet acquisition.
//!
//! This module provides:
//! - The `WalletProvider` seam a generation run draws wallets from
//! - A default Tezos provider built on BIP39 + SLIP-10
//! - The sequential requestor loop

mod provider;
mod record;
mod requestor;
mod tezos;

pub use provider::{Network, SessionConfig, WalletProvider, WalletSession, DEFAULT_RPC_URL};
pub use record::WalletRecord;
pub use requestor::{GenerationRequest, WalletRequestor};
pub use tezos::{TezosSession, TezosWalletProvider};
