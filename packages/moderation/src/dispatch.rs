//! Moderation requests and the collaborator that carries them out.
//!
//! A request is built synchronously by
//! [`ReviewTableState`](crate::ReviewTableState), executed against a
//! [`ModerationGateway`] (one batch call, never one call per id), and its
//! outcome is fed back with [`ReviewTableState::complete`](crate::ReviewTableState::complete).
//!
//! ```text
//! Idle ──begin_*──▶ InFlight ──complete(Ok)──▶ Succeeded ──dismiss──▶ Idle
//!                      │
//!                      └──complete(Err)──▶ Failed ──retry──▶ InFlight
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::entity::{EntityId, EntityKind};
use crate::error::{ModerationError, ModerationResult};

/// What to do with the selected records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModerationAction {
    Approve,
    Reject { reason: String },
}

impl ModerationAction {
    pub fn verb(&self) -> &'static str {
        match self {
            ModerationAction::Approve => "approve",
            ModerationAction::Reject { .. } => "reject",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            ModerationAction::Approve => "approved",
            ModerationAction::Reject { .. } => "rejected",
        }
    }

    pub fn is_reject(&self) -> bool {
        matches!(self, ModerationAction::Reject { .. })
    }
}

/// One batch moderation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationRequest {
    /// Identifies this dispatch so late completions of older requests can be
    /// ignored.
    pub ticket: u64,
    pub kind: EntityKind,
    pub action: ModerationAction,
    pub ids: Vec<EntityId>,
}

impl ModerationRequest {
    /// Perform the single collaborator call for this request.
    pub async fn execute<G>(&self, gateway: &G) -> ModerationResult
    where
        G: ModerationGateway + ?Sized,
    {
        info!(
            ticket = self.ticket,
            kind = %self.kind,
            action = self.action.verb(),
            count = self.ids.len(),
            "Dispatching moderation batch"
        );

        let outcome = match &self.action {
            ModerationAction::Approve => gateway.approve(self.kind, &self.ids).await,
            ModerationAction::Reject { reason } => {
                gateway.reject(self.kind, &self.ids, reason).await
            }
        };

        match &outcome {
            Ok(()) => info!(
                ticket = self.ticket,
                action = self.action.past_tense(),
                count = self.ids.len(),
                "Moderation batch succeeded"
            ),
            Err(error) => warn!(
                ticket = self.ticket,
                action = self.action.verb(),
                %error,
                "Moderation batch failed"
            ),
        }

        outcome
    }
}

/// Progress of the most recent moderation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Idle,
    InFlight {
        request: ModerationRequest,
    },
    Succeeded {
        ticket: u64,
        action: ModerationAction,
        count: usize,
    },
    Failed {
        request: ModerationRequest,
        error: ModerationError,
    },
}

impl RequestStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestStatus::InFlight { .. })
    }

    pub fn error(&self) -> Option<&ModerationError> {
        match self {
            RequestStatus::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Collaborator that applies moderation decisions, normally the REST API.
///
/// Implementations make exactly one call per method invocation and report
/// failure through the result instead of assuming success.
#[async_trait(?Send)]
pub trait ModerationGateway {
    async fn approve(&self, kind: EntityKind, ids: &[EntityId]) -> ModerationResult;

    async fn reject(&self, kind: EntityKind, ids: &[EntityId], reason: &str) -> ModerationResult;
}
