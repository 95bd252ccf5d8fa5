//! Terminal front end for the controller.

use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::{Notice, Ui, BUSY_LABEL};

/// Prints notices to stdout and shows a spinner while busy.
pub struct TerminalUi {
    output_dir: PathBuf,
    spinner: Option<ProgressBar>,
}

impl TerminalUi {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            spinner: None,
        }
    }
}

impl Ui for TerminalUi {
    fn set_busy(&mut self, busy: bool) {
        if busy {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message(BUSY_LABEL);
            spinner.enable_steady_tick(Duration::from_millis(100));
            self.spinner = Some(spinner);
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn notify(&mut self, notice: &Notice) {
        match notice {
            Notice::Success { count } => {
                println!(
                    "{} wallets generated successfully! The file is in {}",
                    count,
                    self.output_dir.display()
                );
            }
            Notice::Invalid(_) | Notice::Failure => println!("{}", notice),
        }
    }
}
