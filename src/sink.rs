//! Boundary with the submission sink.
//!
//! SYSTEM CONTEXT
//! ==============
//! The modal hands each validated payload to a `SubmissionSink` and expects
//! exactly one `Completion` back for it, success or failure. The sink owns
//! transport, timeouts and retries; the modal only owns the `submitting`
//! flag that the completion releases.

#[cfg(test)]
#[path = "sink_test.rs"]
mod sink_test;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::error::AuthError;
use crate::modal::Tab;
use crate::schema::AuthPayload;

/// A validated payload on its way out, tagged with an id for correlation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub id: Uuid,
    pub payload: AuthPayload,
}

impl Submission {
    #[must_use]
    pub fn new(payload: AuthPayload) -> Self {
        Self { id: Uuid::new_v4(), payload }
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        match self.payload {
            AuthPayload::Login(_) => Tab::Login,
            AuthPayload::Register(_) => Tab::Register,
        }
    }

    /// Build the completion report for this submission.
    #[must_use]
    pub fn complete(&self, outcome: SubmitOutcome) -> Completion {
        Completion { id: self.id, outcome }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed(String),
}

/// The sink's callback for one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub id: Uuid,
    pub outcome: SubmitOutcome,
}

/// Receiver of validated payloads.
pub trait SubmissionSink {
    /// Accept a submission for processing.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SinkUnavailable` when the submission cannot be
    /// accepted; no completion will follow in that case.
    fn deliver(&mut self, submission: Submission) -> Result<(), AuthError>;
}

/// Collects submissions in order. Handy for callers that process them later.
impl SubmissionSink for Vec<Submission> {
    fn deliver(&mut self, submission: Submission) -> Result<(), AuthError> {
        self.push(submission);
        Ok(())
    }
}

/// Forwards submissions to an async worker over a bounded channel.
#[derive(Clone, Debug)]
pub struct ChannelSink {
    tx: mpsc::Sender<Submission>,
}

impl ChannelSink {
    #[must_use]
    pub fn new(tx: mpsc::Sender<Submission>) -> Self {
        Self { tx }
    }
}

impl SubmissionSink for ChannelSink {
    fn deliver(&mut self, submission: Submission) -> Result<(), AuthError> {
        self.tx.try_send(submission).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => AuthError::SinkUnavailable("channel full".into()),
            mpsc::error::TrySendError::Closed(_) => AuthError::SinkUnavailable("channel closed".into()),
        })
    }
}
