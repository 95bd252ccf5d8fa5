//! Default provider: local Tezos wallets from fresh BIP39 mnemonics.
//!
//! Each wallet gets its own 24-word mnemonic; the key is derived along
//! `m/44'/1729'/0'/0'` with SLIP-10, the same path common Tezos wallets use,
//! so the mnemonic can be imported elsewhere and yields the same `tz1`.

use bip39::{Language, Mnemonic};
use rand::RngCore;
use tracing::{debug, trace};

use crate::crypto::{derive_path, Keypair, TEZOS_DERIVATION_PATH};
use crate::error::CollaboratorError;

use super::{Network, SessionConfig, WalletProvider, WalletRecord, WalletSession};

/// 256 bits of entropy, i.e. a 24-word mnemonic.
const ENTROPY_BYTES: usize = 32;

/// Opens sessions that derive wallets locally.
#[derive(Debug, Clone, Copy, Default)]
pub struct TezosWalletProvider;

impl TezosWalletProvider {
    pub fn new() -> Self {
        Self
    }
}

impl WalletProvider for TezosWalletProvider {
    type Session = TezosSession;

    fn init_session(&self, config: &SessionConfig) -> Result<TezosSession, CollaboratorError> {
        match config.rpc_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(CollaboratorError::SessionInit(format!(
                    "unsupported RPC scheme '{}'",
                    other
                )))
            }
        }

        debug!(network = %config.network, rpc_url = %config.rpc_url, "Tezos session opened");

        Ok(TezosSession {
            network: config.network,
        })
    }
}

/// A session bound to one network.
#[derive(Debug)]
pub struct TezosSession {
    network: Network,
}

impl WalletSession for TezosSession {
    fn get_wallet(&mut self) -> Result<WalletRecord, CollaboratorError> {
        let mut entropy = [0u8; ENTROPY_BYTES];
        rand::thread_rng().fill_bytes(&mut entropy);

        let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
            .map_err(|e| CollaboratorError::Mnemonic(e.to_string()))?;
        let record = record_from_mnemonic(&mnemonic)?;

        trace!(network = %self.network, address = %record.address, "Wallet derived");
        Ok(record)
    }
}

/// Derives the wallet a mnemonic stands for.
pub fn record_from_mnemonic(mnemonic: &Mnemonic) -> Result<WalletRecord, CollaboratorError> {
    let seed = mnemonic.to_seed("");
    let node = derive_path(&seed, TEZOS_DERIVATION_PATH)?;
    let keypair = Keypair::from_seed(node.signing_key.to_bytes());

    Ok(WalletRecord::new(
        keypair.address().to_b58check(),
        keypair.secret_key_b58check(),
        mnemonic.to_string(),
    ))
}
