//! The wallet provider seam.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::CollaboratorError;

use super::WalletRecord;

/// RPC node the original deployment talks to.
pub const DEFAULT_RPC_URL: &str = "https://mainnet.ecadinfra.com";

/// The Tezos network a session is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Ghostnet,
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "tezos" => Ok(Network::Mainnet),
            "ghostnet" | "testnet" | "tezos-testnet" => Ok(Network::Ghostnet),
            _ => Err(format!("Unknown network: {}", s)),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Ghostnet => write!(f, "ghostnet"),
        }
    }
}

/// Parameters a provider session is opened with. Fixed for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub network: Network,
    pub rpc_url: Url,
}

impl SessionConfig {
    /// Parses `rpc_url` and pairs it with `network`.
    pub fn new(network: Network, rpc_url: &str) -> Result<Self, CollaboratorError> {
        Ok(Self {
            network,
            rpc_url: Url::parse(rpc_url)?,
        })
    }
}

/// Something that can open wallet sessions.
pub trait WalletProvider {
    type Session: WalletSession;

    /// Opens a session bound to `config`.
    fn init_session(&self, config: &SessionConfig) -> Result<Self::Session, CollaboratorError>;
}

/// An open session handing out one wallet per call.
pub trait WalletSession {
    fn get_wallet(&mut self) -> Result<WalletRecord, CollaboratorError>;
}
