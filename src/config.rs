//! Runtime configuration for the wallet generator.

use std::path::PathBuf;

use clap::Parser;

use crate::export::Separator;
use crate::form::{FormState, MAX_COUNT};
use crate::wallet::{Network, SessionConfig, DEFAULT_RPC_URL};

/// Tezos Wallets Generator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Number of wallets to generate (1-1000); the leading integer is used
    #[arg(short = 'n', long, default_value = "10", allow_hyphen_values = true)]
    pub count: String,

    /// Separator for the result file: comma, semicolon, pipe, tab, space or json
    #[arg(short, long, default_value = ",")]
    pub separator: Separator,

    /// Directory the result file is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Tezos network the provider session is bound to
    #[arg(long, default_value = "mainnet")]
    pub network: Network,

    /// RPC endpoint the provider session is configured with
    #[arg(long, default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,
}

impl Config {
    /// Validates the configuration and returns the provider session config.
    ///
    /// Counts of zero or below are left for the form to reject so the user
    /// sees the same message whatever front end drives it.
    pub fn validate(&self) -> Result<SessionConfig, ConfigError> {
        let count = self.form_state().count();
        if count > MAX_COUNT {
            return Err(ConfigError::CountTooLarge {
                count,
                max: MAX_COUNT,
            });
        }

        SessionConfig::new(self.network, &self.rpc_url)
            .map_err(|e| ConfigError::InvalidRpcUrl(e.to_string()))
    }

    /// Returns the initial form state, reading the count the way the form's
    /// count input does.
    pub fn form_state(&self) -> FormState {
        let mut state = FormState::new(0, self.separator);
        state.set_count_input(&self.count);
        state
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Count {count} exceeds the maximum of {max}")]
    CountTooLarge { count: i64, max: i64 },

    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),
}
