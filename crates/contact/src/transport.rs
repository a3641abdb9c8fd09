use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::FormFields;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("endpoint rejected the submission with status {0}")]
    Rejected(u16),
    #[error("no response within {0:?}")]
    Timeout(Duration),
}

/// Delivers a form payload to wherever contact messages are received.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn send(&self, fields: &FormFields) -> Result<(), TransportError>;
}

#[async_trait]
impl<T: SubmissionTransport + ?Sized> SubmissionTransport for Arc<T> {
    async fn send(&self, fields: &FormFields) -> Result<(), TransportError> {
        (**self).send(fields).await
    }
}

/// POSTs the payload as JSON to a fixed endpoint. Any 2xx is an acceptance.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn send(&self, fields: &FormFields) -> Result<(), TransportError> {
        let response = self.client.post(&self.endpoint).json(fields).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(TransportError::Rejected(status.as_u16()));
        }

        tracing::debug!(endpoint = %self.endpoint, status = status.as_u16(), "Submission accepted");

        Ok(())
    }
}
