//! Moderation gateway backed by server functions

use moderation::{
    async_trait, EntityId, EntityKind, ModerationError, ModerationGateway, ModerationResult,
};

use super::{approve_entities, reject_entities};

/// Sends moderation batches through the server to the REST API.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerGateway;

#[async_trait(?Send)]
impl ModerationGateway for ServerGateway {
    async fn approve(&self, kind: EntityKind, ids: &[EntityId]) -> ModerationResult {
        approve_entities(kind, ids.to_vec())
            .await
            .unwrap_or_else(|e| Err(ModerationError::network(e.to_string())))
    }

    async fn reject(&self, kind: EntityKind, ids: &[EntityId], reason: &str) -> ModerationResult {
        reject_entities(kind, ids.to_vec(), reason.to_string())
            .await
            .unwrap_or_else(|e| Err(ModerationError::network(e.to_string())))
    }
}
