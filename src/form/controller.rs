//! Generation controller.
//!
//! Drives one run per click: validate, request wallets, export, notify.
//! The busy flag is raised for the duration of the run and released by a
//! drop guard, so it comes back down on every exit path. A panic inside a
//! collaborator is caught and reported as a failed run.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use chrono::Utc;
use tracing::{debug, error, info};

use crate::error::{GenerationError, ValidationError};
use crate::export::{self, FileSaver};
use crate::wallet::{GenerationRequest, WalletProvider, WalletRequestor};

use super::FormState;

/// Label of the idle trigger.
pub const GENERATE_LABEL: &str = "Generate wallets";
/// Label of the trigger while a run is in flight.
pub const BUSY_LABEL: &str = "Generating...";

/// Where the controller is in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Validating,
    Generating,
    Succeeded,
    Failed,
}

/// A user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The request was rejected before anything ran.
    Invalid(ValidationError),
    /// The file was produced.
    Success { count: usize },
    /// The run failed. Details go to the log only.
    Failure,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Invalid(_) => write!(f, "The number of wallets must be greater than 0"),
            Notice::Success { count } => write!(
                f,
                "{} wallets generated successfully! The file is in your output folder.",
                count
            ),
            Notice::Failure => write!(
                f,
                "Error generating wallets. Check the logs for more details."
            ),
        }
    }
}

/// The surface the controller reports to.
pub trait Ui {
    /// Shows or hides the progress indicator and disables the trigger.
    fn set_busy(&mut self, busy: bool);

    /// Shows a message to the user.
    fn notify(&mut self, notice: &Notice);

    /// Called on every state machine transition.
    fn status_changed(&mut self, _status: FormStatus) {}
}

/// How a click ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Validation failed; the provider was never called.
    Rejected(ValidationError),
    /// All wallets were generated and the file saved.
    Succeeded { count: usize, file_name: String },
    /// The run failed part way.
    Failed,
}

/// Owns the form state and runs generations against it.
pub struct FormController<P, S, U> {
    state: FormState,
    status: FormStatus,
    busy: bool,
    requestor: WalletRequestor<P>,
    saver: S,
    ui: U,
}

impl<P, S, U> FormController<P, S, U>
where
    P: WalletProvider,
    S: FileSaver,
    U: Ui,
{
    pub fn new(state: FormState, requestor: WalletRequestor<P>, saver: S, ui: U) -> Self {
        Self {
            state,
            status: FormStatus::Idle,
            busy: false,
            requestor,
            saver,
            ui,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether the trigger is enabled.
    pub fn can_generate(&self) -> bool {
        !self.busy && self.state.count() > 0
    }

    pub fn button_label(&self) -> &'static str {
        if self.busy {
            BUSY_LABEL
        } else {
            GENERATE_LABEL
        }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn saver(&self) -> &S {
        &self.saver
    }

    /// Runs one generation for the current form state.
    pub fn on_generate_clicked(&mut self) -> ClickOutcome {
        self.transition(FormStatus::Validating);

        let request = match self.state.to_request() {
            Ok(request) => request,
            Err(e) => {
                debug!(error = %e, "Generation request rejected");
                self.ui.notify(&Notice::Invalid(e.clone()));
                self.transition(FormStatus::Idle);
                return ClickOutcome::Rejected(e);
            }
        };

        self.transition(FormStatus::Generating);

        let result = {
            let _busy = BusyGuard::engage(&mut self.busy, &mut self.ui);
            let requestor = &self.requestor;
            let saver = &mut self.saver;
            panic::catch_unwind(AssertUnwindSafe(|| {
                generate_and_export(requestor, saver, &request)
            }))
        };

        let outcome = match result {
            Ok(Ok(file_name)) => {
                info!(count = request.count(), file_name = %file_name, "Wallets generated");
                self.transition(FormStatus::Succeeded);
                self.ui.notify(&Notice::Success {
                    count: request.count(),
                });
                ClickOutcome::Succeeded {
                    count: request.count(),
                    file_name,
                }
            }
            Ok(Err(e)) => {
                error!(error = %e, "Error generating wallets");
                self.fail()
            }
            Err(payload) => {
                error!(panic = panic_message(&*payload), "Wallet generation panicked");
                self.fail()
            }
        };

        self.transition(FormStatus::Idle);
        outcome
    }

    fn fail(&mut self) -> ClickOutcome {
        self.transition(FormStatus::Failed);
        self.ui.notify(&Notice::Failure);
        ClickOutcome::Failed
    }

    fn transition(&mut self, to: FormStatus) {
        debug!(from = ?self.status, to = ?to, "Form status");
        self.status = to;
        self.ui.status_changed(to);
    }
}

fn generate_and_export<P: WalletProvider, S: FileSaver>(
    requestor: &WalletRequestor<P>,
    saver: &mut S,
    request: &GenerationRequest,
) -> Result<String, GenerationError> {
    let records = requestor.request(request)?;
    let file_name = export::export(&records, request.separator(), saver, Utc::now())?;
    Ok(file_name)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "unknown panic"
    }
}

/// Holds the busy flag up until dropped.
struct BusyGuard<'a, U: Ui> {
    busy: &'a mut bool,
    ui: &'a mut U,
}

impl<'a, U: Ui> BusyGuard<'a, U> {
    fn engage(busy: &'a mut bool, ui: &'a mut U) -> Self {
        *busy = true;
        ui.set_busy(true);
        Self { busy, ui }
    }
}

impl<U: Ui> Drop for BusyGuard<'_, U> {
    fn drop(&mut self) {
        *self.busy = false;
        self.ui.set_busy(false);
    }
}
