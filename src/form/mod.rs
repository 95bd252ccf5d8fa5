//! The generation form.
//!
//! - `state`: the count and separator fields
//! - `controller`: validation, the busy flag and the run state machine
//! - `terminal`: a `Ui` that renders to the terminal

mod controller;
mod state;
mod terminal;

pub use controller::{
    ClickOutcome, FormController, FormStatus, Notice, Ui, BUSY_LABEL, GENERATE_LABEL,
};
pub use state::{FormState, DEFAULT_COUNT, MAX_COUNT};
pub use terminal::TerminalUi;
