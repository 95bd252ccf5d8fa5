//! End-to-end generation runs through the public API.

use std::fs;

use serde_json::Value;
use tezos_wallets::form::ClickOutcome;
use tezos_wallets::{
    CollaboratorError, DirectorySaver, FormController, FormState, Network, Notice, Separator,
    SessionConfig, TezosWalletProvider, Ui, WalletProvider, WalletRecord, WalletRequestor,
    WalletSession,
};

#[derive(Default)]
struct SilentUi {
    busy: bool,
    notices: Vec<Notice>,
}

impl Ui for SilentUi {
    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

/// Fails on the given call, succeeding otherwise.
struct FlakyProvider {
    fail_on: usize,
}

struct FlakySession {
    calls: usize,
    fail_on: usize,
}

impl WalletProvider for FlakyProvider {
    type Session = FlakySession;

    fn init_session(&self, _: &SessionConfig) -> Result<FlakySession, CollaboratorError> {
        Ok(FlakySession {
            calls: 0,
            fail_on: self.fail_on,
        })
    }
}

impl WalletSession for FlakySession {
    fn get_wallet(&mut self) -> Result<WalletRecord, CollaboratorError> {
        self.calls += 1;
        if self.calls == self.fail_on {
            return Err(CollaboratorError::Provider("provider fault".into()));
        }
        Ok(WalletRecord::new("tz1fake", "edskfake", "fake mnemonic"))
    }
}

fn session() -> SessionConfig {
    SessionConfig::new(Network::Mainnet, "https://mainnet.ecadinfra.com").unwrap()
}

fn saved_files(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect()
}

#[test]
fn text_export_with_real_provider() {
    let tmp = tempfile::tempdir().unwrap();
    let mut controller = FormController::new(
        FormState::new(3, Separator::Comma),
        WalletRequestor::new(TezosWalletProvider::new(), session()),
        DirectorySaver::new(tmp.path()),
        SilentUi::default(),
    );

    let outcome = controller.on_generate_clicked();
    let file_name = match outcome {
        ClickOutcome::Succeeded { count, file_name } => {
            assert_eq!(count, 3);
            file_name
        }
        other => panic!("unexpected outcome: {:?}", other),
    };

    assert!(file_name.starts_with("tezos_wallets_"));
    assert!(file_name.ends_with(".txt"));
    assert!(!file_name.contains(':'));

    let content = fs::read_to_string(tmp.path().join(&file_name)).unwrap();
    let lines: Vec<_> = content.split('\n').collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        let (address, key) = line.split_once(',').unwrap();
        assert!(address.starts_with("tz1"));
        assert!(key.starts_with("edsk"));
        assert!(!key.contains(','));
    }
    assert_eq!(
        controller.ui().notices,
        vec![Notice::Success { count: 3 }]
    );
}

#[test]
fn json_export_with_real_provider() {
    let tmp = tempfile::tempdir().unwrap();
    let mut controller = FormController::new(
        FormState::new(2, Separator::Json),
        WalletRequestor::new(TezosWalletProvider::new(), session()),
        DirectorySaver::new(tmp.path()),
        SilentUi::default(),
    );

    assert!(matches!(
        controller.on_generate_clicked(),
        ClickOutcome::Succeeded { count: 2, .. }
    ));

    let files = saved_files(tmp.path());
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].extension().unwrap(), "json");

    let parsed: Value = serde_json::from_str(&fs::read_to_string(&files[0]).unwrap()).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    for entry in entries {
        let obj = entry.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["key".to_string(), "wallet".to_string()]);
        assert!(obj["wallet"].as_str().unwrap().starts_with("tz1"));
    }
}

#[test]
fn provider_failure_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let mut controller = FormController::new(
        FormState::new(4, Separator::Pipe),
        WalletRequestor::new(FlakyProvider { fail_on: 4 }, session()),
        DirectorySaver::new(tmp.path()),
        SilentUi::default(),
    );

    assert_eq!(controller.on_generate_clicked(), ClickOutcome::Failed);
    assert!(saved_files(tmp.path()).is_empty());
    assert!(!controller.ui().busy);
    assert!(!controller.is_busy());
    assert_eq!(controller.ui().notices, vec![Notice::Failure]);
}

#[test]
fn zero_count_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let mut controller = FormController::new(
        FormState::new(0, Separator::Comma),
        // Would fail on the first call if it were ever reached.
        WalletRequestor::new(FlakyProvider { fail_on: 1 }, session()),
        DirectorySaver::new(tmp.path()),
        SilentUi::default(),
    );

    assert!(matches!(
        controller.on_generate_clicked(),
        ClickOutcome::Rejected(_)
    ));
    assert!(saved_files(tmp.path()).is_empty());
    assert!(matches!(
        controller.ui().notices.as_slice(),
        [Notice::Invalid(_)]
    ));
}
