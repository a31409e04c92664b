//! Test doubles for the review table.
//!
//! Only available with the `testing` feature:
//!
//! ```toml
//! [dev-dependencies]
//! moderation = { path = "../moderation", features = ["testing"] }
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::dispatch::ModerationGateway;
use crate::entity::{EntityId, EntityKind};
use crate::error::{ModerationError, ModerationResult};

/// One call received by a [`RecordingGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayCall {
    pub kind: EntityKind,
    pub ids: Vec<EntityId>,
    /// `None` for approvals.
    pub reason: Option<String>,
}

/// Gateway that records every call and succeeds unless told otherwise.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    calls: Mutex<Vec<GatewayCall>>,
    failures: Mutex<VecDeque<ModerationError>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next call fail with `error`. Queued failures are consumed in
    /// order; once drained, calls succeed again.
    pub fn fail_next(&self, error: ModerationError) {
        self.failures.lock().unwrap().push_back(error);
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: GatewayCall) -> ModerationResult {
        self.calls.lock().unwrap().push(call);
        match self.failures.lock().unwrap().pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl ModerationGateway for RecordingGateway {
    async fn approve(&self, kind: EntityKind, ids: &[EntityId]) -> ModerationResult {
        self.record(GatewayCall {
            kind,
            ids: ids.to_vec(),
            reason: None,
        })
    }

    async fn reject(&self, kind: EntityKind, ids: &[EntityId], reason: &str) -> ModerationResult {
        self.record(GatewayCall {
            kind,
            ids: ids.to_vec(),
            reason: Some(reason.to_string()),
        })
    }
}
