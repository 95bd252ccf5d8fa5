//! # tezos_wallets
//!
//! Batch Tezos wallet generator with text and JSON export.
//!
//! ## Architecture
//!
//! - `crypto`: Tezos key encoding and SLIP-10 derivation
//! - `wallet`: Wallet provider seam and the sequential requestor loop
//! - `export`: Payload formatting and file saving
//! - `form`: Form state, generation controller and terminal front end
//! - `config`: Runtime configuration
//! - `error`: Error taxonomy shared by all of the above

pub mod config;
pub mod crypto;
pub mod error;
pub mod export;
pub mod form;
pub mod wallet;

pub use config::Config;
pub use error::{CollaboratorError, ExportError, GenerationError, ValidationError};
pub use export::{DirectorySaver, ExportPayload, FileSaver, Separator};
pub use form::{FormController, FormState, FormStatus, Notice, TerminalUi, Ui};
pub use wallet::{
    GenerationRequest, Network, SessionConfig, TezosWalletProvider, WalletProvider,
    WalletRecord, WalletRequestor, WalletSession,
};
