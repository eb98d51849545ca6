//! Backend commands queued from UI to backend worker.

use shared::protocol::SubmitTicketRequest;

#[derive(Debug)]
pub enum BackendCommand {
    SubmitTicket { request: SubmitTicketRequest },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::SubmitTicket { .. } => "submit_ticket",
        }
    }
}
