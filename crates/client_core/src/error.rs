use shared::error::TicketError;
use thiserror::Error;

/// Every way a submit attempt can end without success. The `Display` text is
/// what the form shows as its status message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] TicketError),
    #[error("Submission failed: {detail}")]
    Rejected { status: u16, detail: String },
    #[error("Network error: {0}")]
    Transport(String),
    #[error("A submission is already in progress.")]
    AlreadyInFlight,
}

impl SubmitError {
    /// True when the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, SubmitError::Transport(_))
    }
}
