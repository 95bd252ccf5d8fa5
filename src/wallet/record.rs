use std::fmt;

/// One wallet drawn from a provider.
#[derive(Clone, PartialEq, Eq)]
pub struct WalletRecord {
    /// The public address (`tz1...`)
    pub address: String,
    /// The secret key (`edsk...`)
    pub private_key: String,
    /// The mnemonic the key was derived from
    pub mnemonic: String,
}

impl WalletRecord {
    pub fn new(
        address: impl Into<String>,
        private_key: impl Into<String>,
        mnemonic: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            private_key: private_key.into(),
            mnemonic: mnemonic.into(),
        }
    }
}

impl fmt::Debug for WalletRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletRecord")
            .field("address", &self.address)
            .field("private_key", &"<redacted>")
            .field("mnemonic", &"<redacted>")
            .finish()
    }
}
