use serde::Deserialize;
use thiserror::Error;

use crate::domain::NumberKind;

/// Why a form selection cannot be turned into a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please pick 5 main numbers and 1 Powerball.")]
    IncompleteSelection {
        main_selected: usize,
        powerball_selected: bool,
    },
    #[error("{value} is not a valid {}.", .kind.label())]
    OutOfRange { kind: NumberKind, value: u8 },
    #[error("Main number {0} was picked more than once.")]
    DuplicateNumber(u8),
}

/// Error body the collection endpoint may return on a non-success status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Extracts a non-blank `message` from a raw response body, if any.
    pub fn detail_from_bytes(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ApiErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty())
    }
}
