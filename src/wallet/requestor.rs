//! The sequential wallet request loop.

use tracing::{error, info, trace};

use crate::error::{CollaboratorError, ValidationError};
use crate::export::Separator;

use super::{SessionConfig, WalletProvider, WalletRecord, WalletSession};

/// A validated generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    count: usize,
    separator: Separator,
}

impl GenerationRequest {
    /// Validates `count` and builds a request.
    pub fn new(count: i64, separator: Separator) -> Result<Self, ValidationError> {
        if count <= 0 {
            return Err(ValidationError::NonPositiveCount(count));
        }
        let count =
            usize::try_from(count).map_err(|_| ValidationError::NonPositiveCount(count))?;

        Ok(Self { count, separator })
    }

    /// Number of wallets to generate (always at least 1).
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }
}

/// Draws wallets from a provider, one at a time.
#[derive(Debug, Clone)]
pub struct WalletRequestor<P> {
    provider: P,
    session: SessionConfig,
}

impl<P: WalletProvider> WalletRequestor<P> {
    pub fn new(provider: P, session: SessionConfig) -> Self {
        Self { provider, session }
    }

    /// Opens one session and requests exactly `request.count()` wallets.
    ///
    /// The first provider error aborts the run; nothing gathered so far is
    /// returned.
    pub fn request(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<WalletRecord>, CollaboratorError> {
        info!(
            count = request.count(),
            network = %self.session.network,
            rpc_url = %self.session.rpc_url,
            "Requesting wallets"
        );

        let mut session = self.provider.init_session(&self.session).map_err(|e| {
            error!(error = %e, "Failed to open wallet provider session");
            e
        })?;

        let mut records = Vec::with_capacity(request.count());
        for index in 0..request.count() {
            let record = session.get_wallet().map_err(|e| {
                error!(
                    error = %e,
                    call = index + 1,
                    total = request.count(),
                    "Wallet provider call failed"
                );
                e
            })?;
            trace!(index, address = %record.address, "Wallet received");
            records.push(record);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::wallet::{Network, DEFAULT_RPC_URL};

    /// Provider that counts calls and optionally fails on the k-th one.
    struct ScriptedProvider {
        calls: Rc<Cell<usize>>,
        sessions: Rc<Cell<usize>>,
        fail_on: Option<usize>,
    }

    struct ScriptedSession {
        calls: Rc<Cell<usize>>,
        fail_on: Option<usize>,
    }

    impl WalletProvider for ScriptedProvider {
        type Session = ScriptedSession;

        fn init_session(&self, _: &SessionConfig) -> Result<ScriptedSession, CollaboratorError> {
            self.sessions.set(self.sessions.get() + 1);
            Ok(ScriptedSession {
                calls: self.calls.clone(),
                fail_on: self.fail_on,
            })
        }
    }

    impl WalletSession for ScriptedSession {
        fn get_wallet(&mut self) -> Result<WalletRecord, CollaboratorError> {
            let n = self.calls.get() + 1;
            self.calls.set(n);
            if self.fail_on == Some(n) {
                return Err(CollaboratorError::Provider(format!("call {} failed", n)));
            }
            Ok(WalletRecord::new(
                format!("tz1addr{}", n),
                format!("edskkey{}", n),
                "mnemonic",
            ))
        }
    }

    type Fixture = (
        WalletRequestor<ScriptedProvider>,
        Rc<Cell<usize>>,
        Rc<Cell<usize>>,
    );

    fn requestor(fail_on: Option<usize>) -> Fixture {
        let calls = Rc::new(Cell::new(0));
        let sessions = Rc::new(Cell::new(0));
        let provider = ScriptedProvider {
            calls: calls.clone(),
            sessions: sessions.clone(),
            fail_on,
        };
        let session = SessionConfig::new(Network::Mainnet, DEFAULT_RPC_URL).unwrap();
        (WalletRequestor::new(provider, session), calls, sessions)
    }

    #[test]
    fn test_request_validation() {
        assert!(GenerationRequest::new(1, Separator::Comma).is_ok());
        assert_eq!(
            GenerationRequest::new(0, Separator::Comma),
            Err(ValidationError::NonPositiveCount(0))
        );
        assert_eq!(
            GenerationRequest::new(-5, Separator::Json),
            Err(ValidationError::NonPositiveCount(-5))
        );
    }

    #[test]
    fn test_returns_records_in_call_order() {
        let (requestor, calls, sessions) = requestor(None);
        let request = GenerationRequest::new(3, Separator::Comma).unwrap();

        let records = requestor.request(&request).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].address, "tz1addr1");
        assert_eq!(records[2].address, "tz1addr3");
        assert_eq!(calls.get(), 3);
        assert_eq!(sessions.get(), 1);
    }

    #[test]
    fn test_failure_aborts_remaining_calls() {
        let (requestor, calls, _) = requestor(Some(2));
        let request = GenerationRequest::new(5, Separator::Comma).unwrap();

        let err = requestor.request(&request).unwrap_err();

        assert!(matches!(err, CollaboratorError::Provider(_)));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_failure_on_first_call() {
        let (requestor, calls, _) = requestor(Some(1));
        let request = GenerationRequest::new(4, Separator::Comma).unwrap();

        assert!(requestor.request(&request).is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_failure_on_last_call_returns_nothing() {
        let (requestor, calls, _) = requestor(Some(4));
        let request = GenerationRequest::new(4, Separator::Json).unwrap();

        let err = requestor.request(&request).unwrap_err();

        assert!(matches!(err, CollaboratorError::Provider(ref msg) if msg == "call 4 failed"));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_count_bounds() {
        let (single, calls, _) = requestor(None);
        let records = single
            .request(&GenerationRequest::new(1, Separator::Comma).unwrap())
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(calls.get(), 1);

        let (max, calls, sessions) = requestor(None);
        let records = max
            .request(&GenerationRequest::new(1000, Separator::Comma).unwrap())
            .unwrap();
        assert_eq!(records.len(), 1000);
        assert_eq!(records[999].address, "tz1addr1000");
        assert_eq!(calls.get(), 1000);
        assert_eq!(sessions.get(), 1);
    }

    #[test]
    fn test_session_init_failure() {
        struct BrokenProvider;

        impl WalletProvider for BrokenProvider {
            type Session = ScriptedSession;

            fn init_session(&self, _: &SessionConfig) -> Result<ScriptedSession, CollaboratorError> {
                Err(CollaboratorError::SessionInit("node unreachable".into()))
            }
        }

        let session = SessionConfig::new(Network::Mainnet, DEFAULT_RPC_URL).unwrap();
        let requestor = WalletRequestor::new(BrokenProvider, session);
        let request = GenerationRequest::new(2, Separator::Comma).unwrap();

        assert!(matches!(
            requestor.request(&request),
            Err(CollaboratorError::SessionInit(_))
        ));
    }
}
