//! Delivery of tickets to the collection endpoint.

use std::{error::Error as _, time::Duration};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{error::ApiErrorBody, protocol::SubmitTicketRequest};
use url::Url;

use crate::error::SubmitError;

#[async_trait]
pub trait TicketTransport: Send + Sync {
    /// Resolves once the endpoint answered with a success status.
    async fn submit(&self, request: &SubmitTicketRequest) -> Result<(), SubmitError>;
}

pub struct HttpTicketTransport {
    http: Client,
    endpoint_url: Url,
    timeout: Duration,
}

impl HttpTicketTransport {
    pub fn new(endpoint_url: Url, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            endpoint_url,
            timeout,
        })
    }

    pub fn endpoint_url(&self) -> &Url {
        &self.endpoint_url
    }

    fn describe_send_failure(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            return format!("no response within {}s", self.timeout.as_secs_f32());
        }

        let mut message = if err.is_connect() {
            format!("could not connect to {}", self.endpoint_url)
        } else {
            err.to_string()
        };
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

#[async_trait]
impl TicketTransport for HttpTicketTransport {
    async fn submit(&self, request: &SubmitTicketRequest) -> Result<(), SubmitError> {
        let response = self
            .http
            .post(self.endpoint_url.clone())
            .json(request)
            .send()
            .await
            .map_err(|err| SubmitError::Transport(self.describe_send_failure(&err)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.bytes().await.unwrap_or_default();
        let detail = ApiErrorBody::detail_from_bytes(&body).unwrap_or_else(|| status_line(status));
        tracing::warn!(status = status.as_u16(), %detail, "endpoint rejected ticket");
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
