//! Vendor and company registration records as served by the REST API.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Identity
// ============================================================================

/// Identifier of a reviewable record. Immutable for the record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Anything a [`Selection`](crate::Selection) can be computed over.
///
/// The selection only ever looks at ids, never at record content.
pub trait Identified {
    fn id(&self) -> &EntityId;
}

impl Identified for EntityId {
    fn id(&self) -> &EntityId {
        self
    }
}

// ============================================================================
// Kind
// ============================================================================

/// Which registration table is being reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Vendor,
    Company,
}

impl EntityKind {
    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::Vendor => "vendor",
            EntityKind::Company => "company",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Vendor => "vendors",
            EntityKind::Company => "companies",
        }
    }

    /// `"1 vendor"`, `"3 companies"`, `"0 vendors"`.
    pub fn count_label(&self, count: usize) -> String {
        if count == 1 {
            format!("{count} {}", self.singular())
        } else {
            format!("{count} {}", self.plural())
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Vendor => "Vendors",
            EntityKind::Company => "Companies",
        }
    }

    /// Header of the location column.
    pub fn location_label(&self) -> &'static str {
        match self {
            EntityKind::Vendor => "Location",
            EntityKind::Company => "Headquarters",
        }
    }

    /// Collection segment of the admin REST endpoints.
    pub fn resource_path(&self) -> &'static str {
        self.plural()
    }

    pub fn variants() -> &'static [EntityKind] {
        &[EntityKind::Vendor, EntityKind::Company]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pending",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
        }
    }
}

/// Admin who approved a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approver {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewableEntity {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub gst_number: Option<String>,
    pub pan_number: Option<String>,
    pub aadhar_number: Option<String>,
    pub location: Option<String>,
    pub is_approved: bool,
    pub approval_status: ApprovalStatus,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
    pub approved_by: Option<Approver>,
    pub rejection_reason: Option<String>,
}

impl Identified for ReviewableEntity {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// A server-side invariant a record fails to uphold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Approved without `approvedAt`.
    ApprovedWithoutTimestamp,
    /// Approved without `approvedBy`.
    ApprovedWithoutApprover,
    /// Rejected with a missing or blank reason.
    RejectedWithoutReason,
}

impl ReviewableEntity {
    /// The server owns these invariants; the table only reports breaches so
    /// malformed records show up in logs.
    pub fn invariant_violations(&self) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();
        match self.approval_status {
            ApprovalStatus::Approved => {
                if self.approved_at.is_none() {
                    violations.push(InvariantViolation::ApprovedWithoutTimestamp);
                }
                if self.approved_by.is_none() {
                    violations.push(InvariantViolation::ApprovedWithoutApprover);
                }
            }
            ApprovalStatus::Rejected => {
                let blank = self
                    .rejection_reason
                    .as_deref()
                    .map_or(true, |r| r.trim().is_empty());
                if blank {
                    violations.push(InvariantViolation::RejectedWithoutReason);
                }
            }
            ApprovalStatus::Pending => {}
        }
        violations
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    pub fn entity(id: &str, name: &str) -> ReviewableEntity {
        let created = Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap();
        ReviewableEntity {
            id: EntityId::from(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            role: "vendor".to_string(),
            gst_number: Some("27AAPFU0939F1ZV".to_string()),
            pan_number: None,
            aadhar_number: None,
            location: Some("Pune, MH".to_string()),
            is_approved: false,
            approval_status: ApprovalStatus::Pending,
            is_active: true,
            created_at: created,
            updated_at: created,
            approved_at: None,
            approved_by: None,
            rejection_reason: None,
        }
    }

    pub fn entities(ids: &[&str]) -> Vec<ReviewableEntity> {
        ids.iter()
            .map(|id| entity(id, &format!("Supplier {id}")))
            .collect()
    }
}
