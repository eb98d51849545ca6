use serde::{Deserialize, Serialize};

use crate::domain::Ticket;

/// JSON body posted to the collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitTicketRequest {
    pub message: String,
}

impl From<&Ticket> for SubmitTicketRequest {
    fn from(ticket: &Ticket) -> Self {
        Self {
            message: ticket.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_single_message_field() {
        let ticket = Ticket::new("Bob", &[10, 20, 30, 40, 50], Some(7)).expect("ticket");
        let body = serde_json::to_value(SubmitTicketRequest::from(&ticket)).expect("json");
        assert_eq!(
            body,
            serde_json::json!({
                "message": "Name: Bob, Main numbers: 10, 20, 30, 40, 50, Powerball: 7"
            })
        );
    }
}
