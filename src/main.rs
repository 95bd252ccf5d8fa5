//! Tezos Wallets Generator CLI
//!
//! Usage:
//!   tezos_wallets                      # 10 wallets, comma separated
//!   tezos_wallets -n 3 -s json         # 3 wallets as a JSON array
//!   tezos_wallets -n 50 -s tab -o out  # 50 wallets, tab separated, into ./out

use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tezos_wallets::form::ClickOutcome;
use tezos_wallets::{
    Config, DirectorySaver, FormController, TerminalUi, TezosWalletProvider, WalletRequestor,
};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tezos_wallets=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::parse();

    let session = match config.validate() {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };
    let form_state = config.form_state();
    let saver = DirectorySaver::new(&config.output_dir);

    println!("Tezos Wallets Generator");
    println!("=======================");
    println!("Wallets:   {}", form_state.count());
    println!("Separator: {}", form_state.separator().label());
    println!("Network:   {}", session.network);
    println!("Output:    {}", saver.dir().display());
    println!();

    let ui = TerminalUi::new(saver.dir());
    let mut controller = FormController::new(
        form_state,
        WalletRequestor::new(TezosWalletProvider::new(), session),
        saver,
        ui,
    );

    match controller.on_generate_clicked() {
        ClickOutcome::Succeeded { file_name, .. } => {
            println!("File: {}", controller.saver().dir().join(file_name).display());
        }
        ClickOutcome::Rejected(_) | ClickOutcome::Failed => process::exit(1),
    }
}
