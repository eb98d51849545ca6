//! Events sent from the backend worker back to the UI thread.

use client_core::SubmitError;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    /// The worker could not start; no submission can be delivered.
    BackendFailed(String),
    SubmissionFinished(Result<(), SubmitError>),
}

pub fn classify_backend_failure(message: &str) -> String {
    let lower = message.to_ascii_lowercase();
    if lower.contains("runtime") {
        "Backend worker startup failure; restart the app and retry.".to_string()
    } else if lower.contains("http client") || lower.contains("tls") {
        "Could not prepare the network client; check the endpoint configuration.".to_string()
    } else {
        format!("Backend error: {message}")
    }
}
