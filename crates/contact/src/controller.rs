use std::{
    sync::{Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use thiserror::Error;

use crate::{Field, FormFields, SubmissionStatus, SubmissionTransport, TransportError};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("missing required fields: {0:?}")]
    Incomplete(Vec<Field>),
}

#[derive(Default)]
struct State {
    fields: FormFields,
    status: SubmissionStatus,
}

fn lock_state(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Settles an abandoned submission on `Failed` so the controller never stays
/// `Submitting` once the send is gone.
struct InFlightGuard<'a> {
    state: &'a Mutex<State>,
    settled: bool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        let mut state = lock_state(self.state);
        if state.status == SubmissionStatus::Submitting {
            tracing::warn!("Contact submission abandoned before it settled");
            state.status = SubmissionStatus::Failed;
        }
    }
}

/// Owns one contact form's fields and drives at most one submission at a time.
///
/// The lock is never held across the send, so reads stay available while a
/// request is in flight.
pub struct SubmissionController<T> {
    transport: T,
    timeout: Duration,
    state: Mutex<State>,
}

impl<T: SubmissionTransport> SubmissionController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            timeout: DEFAULT_TIMEOUT,
            state: Mutex::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        lock_state(&self.state)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.lock().status
    }

    pub fn is_submitting(&self) -> bool {
        self.status() == SubmissionStatus::Submitting
    }

    pub fn fields(&self) -> FormFields {
        self.lock().fields.clone()
    }

    pub fn banner(&self) -> Option<&'static str> {
        self.status().banner()
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        self.lock().fields.set(field, value);
    }

    /// Returns a success or failure banner to `Idle`.
    pub fn dismiss(&self) {
        let mut state = self.lock();
        if state.status.is_settled() {
            state.status = SubmissionStatus::Idle;
        }
    }

    /// Sends the current fields and settles on `Succeeded` or `Failed`.
    ///
    /// Transport errors never escape: they are logged and surface as
    /// `Failed`. A call made while another is in flight, or with a required
    /// field blank, is refused before anything is sent. Dropping the returned
    /// future mid-send settles on `Failed` with the fields kept.
    pub async fn submit(&self) -> Result<SubmissionStatus, SubmitError> {
        let snapshot = {
            let mut state = self.lock();
            if state.status == SubmissionStatus::Submitting {
                return Err(SubmitError::InFlight);
            }

            let missing = state.fields.missing_required();
            if !missing.is_empty() {
                return Err(SubmitError::Incomplete(missing));
            }

            state.status = SubmissionStatus::Submitting;
            state.fields.clone()
        };

        let mut guard = InFlightGuard {
            state: &self.state,
            settled: false,
        };

        let outcome = match tokio::time::timeout(self.timeout, self.transport.send(&snapshot)).await
        {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout(self.timeout)),
        };

        guard.settled = true;
        let mut state = self.lock();
        let status = match outcome {
            Ok(()) => {
                tracing::info!(email = %snapshot.email, "Contact message sent");
                state.fields.clear();
                SubmissionStatus::Succeeded
            }
            Err(err) => {
                tracing::warn!(error = %err, email = %snapshot.email, "Contact message not sent");
                SubmissionStatus::Failed
            }
        };
        state.status = status;

        Ok(status)
    }
}
