//! Server functions backing the review pages
//!
//! These run on the server and forward to the REST API with the configured
//! service token. Moderation calls return `Ok(Err(..))` when the API refuses,
//! so the outer error only ever means the server function itself failed.

use dioxus::prelude::*;
use moderation::{EntityId, EntityKind, ModerationError, ModerationResult, ReviewableEntity};

use crate::types::ReviewStats;

/// List all registrations of one kind
#[server]
pub async fn fetch_entities(kind: EntityKind) -> Result<Vec<ReviewableEntity>, ServerFnError> {
    let client = server_api_client()?;

    let entities = client
        .list_entities(kind)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    for entity in &entities {
        let violations = entity.invariant_violations();
        if !violations.is_empty() {
            tracing::warn!(%kind, id = %entity.id, ?violations, "API returned inconsistent record");
        }
    }

    Ok(entities)
}

/// Approve a batch of registrations
#[server]
pub async fn approve_entities(
    kind: EntityKind,
    ids: Vec<EntityId>,
) -> Result<ModerationResult, ServerFnError> {
    let client = server_api_client()?;

    Ok(client.approve(kind, &ids).await.map_err(Into::into))
}

/// Reject a batch of registrations with a reason
#[server]
pub async fn reject_entities(
    kind: EntityKind,
    ids: Vec<EntityId>,
    reason: String,
) -> Result<ModerationResult, ServerFnError> {
    if let Err(refused) = require_reason(&reason) {
        return Ok(Err(refused));
    }

    let client = server_api_client()?;

    Ok(client.reject(kind, &ids, &reason).await.map_err(Into::into))
}

/// Per-status counts for the dashboard
#[server]
pub async fn fetch_review_stats() -> Result<ReviewStats, ServerFnError> {
    use crate::types::StatusCounts;

    let client = server_api_client()?;

    let (vendors, companies) = tokio::try_join!(
        client.list_entities(EntityKind::Vendor),
        client.list_entities(EntityKind::Company),
    )
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(ReviewStats {
        vendors: StatusCounts::tally(&vendors),
        companies: StatusCounts::tally(&companies),
    })
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

/// Blank reasons are refused as a bad request so the client does not offer
/// a retry that cannot succeed.
#[cfg_attr(not(feature = "server"), allow(dead_code))]
fn require_reason(reason: &str) -> ModerationResult {
    if reason.trim().is_empty() {
        return Err(ModerationError::Api {
            status: 400,
            message: "A rejection reason is required".to_string(),
        });
    }
    Ok(())
}

#[cfg(feature = "server")]
fn server_api_client() -> Result<super::ApiClient, ServerFnError> {
    let config = crate::config::get().ok_or_else(|| ServerFnError::new("Configuration not loaded"))?;

    super::ApiClient::from_config(config).map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_reason_is_a_bad_request() {
        let err = require_reason(" \n\t").unwrap_err();
        assert!(matches!(err, ModerationError::Api { status: 400, .. }));
        assert!(!err.is_retryable());
    }

    #[test]
    fn written_reason_passes() {
        assert_eq!(require_reason("expired trade licence"), Ok(()));
    }
}
