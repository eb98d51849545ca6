//! Submit status shown under the ticket form.

use crate::error::SubmitError;

pub const SENDING_MESSAGE: &str = "Sending ticket...";
pub const SUCCESS_MESSAGE: &str = "Your ticket was submitted successfully!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    status: SubmissionStatus,
    message: String,
}

impl SubmissionState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        Self {
            status: SubmissionStatus::Loading,
            message: SENDING_MESSAGE.to_string(),
        }
    }

    pub fn succeeded() -> Self {
        Self {
            status: SubmissionStatus::Success,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failed(err: &SubmitError) -> Self {
        Self {
            status: SubmissionStatus::Error,
            message: err.to_string(),
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Loading
    }
}
