//! Error types for wallet generation.
//!
//! A generation run fails for one of three reasons: the request was invalid,
//! the wallet provider failed, or the export could not be written. Each has
//! its own enum so callers can match on the stage that failed.

use std::path::PathBuf;

use thiserror::Error;

/// The request was rejected before any provider call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The number of wallets must be greater than 0 (got {0})")]
    NonPositiveCount(i64),
}

/// A failure reported by the wallet provider, during session setup or while
/// producing a record.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(#[from] url::ParseError),

    #[error("Session initialization failed: {0}")]
    SessionInit(String),

    #[error("Mnemonic generation failed: {0}")]
    Mnemonic(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("Wallet provider error: {0}")]
    Provider(String),
}

/// Building or saving the export file failed.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize wallets: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any error that ends a generation run.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
