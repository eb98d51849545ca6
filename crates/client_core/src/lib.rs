//! Core of the lottery ticket client: selection state, quick pick, the
//! submission workflow, and the HTTP transport that delivers tickets.

pub mod config;
pub mod controller;
pub mod error;
pub mod gate;
pub mod quick_pick;
pub mod selection;
pub mod submission;
pub mod transport;

pub use config::{load_settings, Settings};
pub use controller::{prepare_submission, reduce, FormAction, FormState, LotteryController};
pub use error::SubmitError;
pub use gate::AccessGate;
pub use quick_pick::{quick_pick, quick_pick_with, QuickPick};
pub use selection::SelectionState;
pub use submission::{SubmissionState, SubmissionStatus};
pub use transport::{HttpTicketTransport, TicketTransport};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
