//! Error types for the review table.
//!
//! Two kinds of failure exist and they never mix:
//!
//! - [`DispatchBlocked`]: the table refused to issue a request (nothing
//!   selected, empty reason, a request already in flight). No call was made.
//! - [`ModerationError`]: the collaborator was called and reported failure.
//!   These are kept in [`RequestStatus::Failed`](crate::RequestStatus) so the
//!   UI can show them and offer a retry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a single collaborator call.
pub type ModerationResult = Result<(), ModerationError>;

// =============================================================================
// Local refusals
// =============================================================================

/// Why a moderation action was not dispatched.
///
/// The UI disables the matching buttons, so these normally only surface in
/// logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchBlocked {
    #[error("no rows are selected")]
    NothingSelected,

    #[error("a rejection reason is required")]
    EmptyReason,

    #[error("the rejection dialog is not open")]
    DialogClosed,

    #[error("a moderation request is already in flight")]
    RequestInFlight,

    #[error("there is no failed request to retry")]
    NothingToRetry,
}

// =============================================================================
// Collaborator failures
// =============================================================================

/// Failure reported by a [`ModerationGateway`](crate::ModerationGateway).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModerationError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("not signed in")]
    Unauthorized,

    #[error("not allowed to moderate these records")]
    Forbidden,

    #[error("one or more records no longer exist")]
    NotFound,

    #[error("conflict: {message}")]
    Conflict { message: String },

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response: {message}")]
    Decode { message: String },
}

impl ModerationError {
    pub fn network(message: impl Into<String>) -> Self {
        ModerationError::Network {
            message: message.into(),
        }
    }

    /// Map a non-success HTTP status and body to an error kind.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        match status {
            401 => ModerationError::Unauthorized,
            403 => ModerationError::Forbidden,
            404 => ModerationError::NotFound,
            409 => ModerationError::Conflict {
                message: body.into(),
            },
            _ => ModerationError::Api {
                status,
                message: body.into(),
            },
        }
    }

    /// Whether pressing "Retry" can plausibly succeed without other changes.
    pub fn is_retryable(&self) -> bool {
        match self {
            ModerationError::Network { .. } => true,
            ModerationError::Api { status, .. } => *status >= 500,
            ModerationError::Unauthorized
            | ModerationError::Forbidden
            | ModerationError::NotFound
            | ModerationError::Conflict { .. }
            | ModerationError::Decode { .. } => false,
        }
    }

    /// Short message for the error banner.
    ///
    /// Server-side details are only echoed for conflicts, which carry a
    /// human-readable explanation from the API.
    pub fn user_message(&self) -> String {
        match self {
            ModerationError::Network { .. } => {
                "Could not reach the server. Check your connection and retry.".to_string()
            }
            ModerationError::Unauthorized => "Your session has expired. Sign in again.".to_string(),
            ModerationError::Forbidden => {
                "You do not have permission to moderate these records.".to_string()
            }
            ModerationError::NotFound => {
                "Some of the selected records no longer exist. Refresh the list.".to_string()
            }
            ModerationError::Conflict { message } => message.clone(),
            ModerationError::Api { status, .. } => {
                format!("The server rejected the request (status {status}).")
            }
            ModerationError::Decode { .. } => {
                "The server sent an unexpected response.".to_string()
            }
        }
    }
}
