//! Submission state for the analyzer page.
//!
//! The page state is a single [`Session`]: the raw input, the last successful
//! result set and a [`Phase`]. Every submission takes a new sequence number,
//! and a completion only lands if it carries the latest one, so a slow
//! response can never overwrite a newer submission.

use dioxus::logger::tracing::{debug, info};

use crate::{
    analysis::{AnalysisRequest, DrugResult},
    client::AnalyzeApi,
    error::{RequestError, ValidationError},
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        seq: u64,
    },
    Failed(String),
}

/// A validated submission waiting to be dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    pub request: AnalysisRequest,
}

/// The answer to a [`Ticket`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub seq: u64,
    pub outcome: Result<Vec<DrugResult>, RequestError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub input: String,
    results: Vec<DrugResult>,
    phase: Phase,
    latest: u64,
}

impl Session {
    pub fn results(&self) -> &[DrugResult] {
        &self.results
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Validates the current input and moves to `Loading`.
    ///
    /// Invalid input fails the cycle right away. Both outcomes supersede any
    /// request still in flight.
    pub fn submit(&mut self) -> Result<Ticket, ValidationError> {
        self.latest += 1;
        match AnalysisRequest::parse(&self.input) {
            Ok(request) => {
                self.phase = Phase::Loading { seq: self.latest };
                Ok(Ticket {
                    seq: self.latest,
                    request,
                })
            }
            Err(e) => {
                self.phase = Phase::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Applies a completion. Returns `false` if it was stale and dropped.
    ///
    /// Failures keep the previous result set on screen.
    pub fn complete(&mut self, completion: Completion) -> bool {
        if completion.seq != self.latest {
            debug!(
                "dropping stale response #{} (latest is #{})",
                completion.seq, self.latest
            );
            return false;
        }
        match completion.outcome {
            Ok(results) => {
                info!("received {} result(s)", results.len());
                self.results = results;
                self.phase = Phase::Idle;
            }
            Err(e) => {
                self.phase = Phase::Failed(e.user_message());
            }
        }
        true
    }
}

/// Runs the single outbound call for a ticket.
pub async fn dispatch<A: AnalyzeApi + ?Sized>(api: &A, ticket: Ticket) -> Completion {
    let outcome = api.analyze(&ticket.request).await;
    Completion {
        seq: ticket.seq,
        outcome,
    }
}
