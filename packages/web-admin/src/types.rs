//! Type definitions for REST API payloads and dashboard data

use moderation::{ApprovalStatus, EntityId, EntityKind, ReviewableEntity};
use serde::{Deserialize, Serialize};

// ============================================================================
// Request / Response Wrappers
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproveRequest {
    pub ids: Vec<EntityId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectRequest {
    pub ids: Vec<EntityId>,
    pub reason: String,
}

// ============================================================================
// Dashboard Types
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn tally(entities: &[ReviewableEntity]) -> Self {
        entities
            .iter()
            .fold(Self::default(), |mut counts, entity| {
                counts.total += 1;
                match entity.approval_status {
                    ApprovalStatus::Pending => counts.pending += 1,
                    ApprovalStatus::Approved => counts.approved += 1,
                    ApprovalStatus::Rejected => counts.rejected += 1,
                }
                counts
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewStats {
    pub vendors: StatusCounts,
    pub companies: StatusCounts,
}

impl ReviewStats {
    pub fn for_kind(&self, kind: EntityKind) -> StatusCounts {
        match kind {
            EntityKind::Vendor => self.vendors,
            EntityKind::Company => self.companies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, status: &str) -> ReviewableEntity {
        let reason = if status == "rejected" {
            "\"incomplete documents\""
        } else {
            "null"
        };
        serde_json::from_str(&format!(
            r#"{{
                "id": "{id}",
                "name": "Record {id}",
                "email": "r{id}@example.com",
                "role": "company_admin",
                "gstNumber": null,
                "panNumber": null,
                "aadharNumber": null,
                "location": null,
                "isApproved": {approved},
                "approvalStatus": "{status}",
                "isActive": true,
                "createdAt": "2024-02-10T08:00:00Z",
                "updatedAt": "2024-02-10T08:00:00Z",
                "approvedAt": null,
                "approvedBy": null,
                "rejectionReason": {reason}
            }}"#,
            approved = status == "approved",
        ))
        .unwrap()
    }

    #[test]
    fn tally_counts_each_status() {
        let records = vec![
            record("1", "pending"),
            record("2", "pending"),
            record("3", "approved"),
            record("4", "rejected"),
        ];

        assert_eq!(
            StatusCounts::tally(&records),
            StatusCounts {
                total: 4,
                pending: 2,
                approved: 1,
                rejected: 1
            }
        );
        assert_eq!(StatusCounts::tally(&[]), StatusCounts::default());
    }

    #[test]
    fn list_response_unwraps_data() {
        let json = format!(
            r#"{{ "data": [{}] }}"#,
            serde_json::to_string(&record("9", "pending")).unwrap()
        );
        let response: ListResponse<ReviewableEntity> = serde_json::from_str(&json).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id, EntityId::from("9"));
    }

    #[test]
    fn reject_request_body_shape() {
        let body = RejectRequest {
            ids: vec![EntityId::from("3")],
            reason: "duplicate listing".into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "ids": ["3"], "reason": "duplicate listing" })
        );
    }
}
