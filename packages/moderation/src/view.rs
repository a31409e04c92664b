//! What the review table renders, derived from records and state.
//!
//! Nothing here has side effects. Components turn a [`TableView`] into markup
//! and send user events back to [`ReviewTableState`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{ApprovalStatus, EntityId, EntityKind, ReviewableEntity};
use crate::selection::CheckboxState;
use crate::state::ReviewTableState;

// ============================================================================
// Per-row formatting
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Amber,
    Green,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

impl StatusBadge {
    pub fn for_status(status: ApprovalStatus) -> Self {
        let tone = match status {
            ApprovalStatus::Pending => BadgeTone::Amber,
            ApprovalStatus::Approved => BadgeTone::Green,
            ApprovalStatus::Rejected => BadgeTone::Red,
        };
        Self {
            label: status.label(),
            tone,
        }
    }
}

/// Up to two upper-case initials for the avatar. `"?"` for a blank name.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// `Mon D, YYYY`, e.g. `Jan 5, 2024`.
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

// ============================================================================
// Filter
// ============================================================================

/// Status tabs above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    All,
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Approved => "Approved",
            StatusFilter::Rejected => "Rejected",
        }
    }

    pub fn matches(&self, status: ApprovalStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == ApprovalStatus::Pending,
            StatusFilter::Approved => status == ApprovalStatus::Approved,
            StatusFilter::Rejected => status == ApprovalStatus::Rejected,
        }
    }

    pub fn apply(&self, entities: &[ReviewableEntity]) -> Vec<ReviewableEntity> {
        entities
            .iter()
            .filter(|entity| self.matches(entity.approval_status))
            .cloned()
            .collect()
    }

    pub fn variants() -> &'static [StatusFilter] {
        &[
            StatusFilter::All,
            StatusFilter::Pending,
            StatusFilter::Approved,
            StatusFilter::Rejected,
        ]
    }
}

// ============================================================================
// Table
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub initials: String,
    pub badge: StatusBadge,
    pub location: String,
    pub gst_number: Option<String>,
    pub pan_number: Option<String>,
    pub joined: String,
    pub approved_by: Option<String>,
    pub rejection_reason: Option<String>,
    pub is_active: bool,
    pub selected: bool,
}

impl RowView {
    fn build(entity: &ReviewableEntity, selected: bool) -> Self {
        Self {
            id: entity.id.clone(),
            name: entity.name.clone(),
            email: entity.email.clone(),
            initials: initials(&entity.name),
            badge: StatusBadge::for_status(entity.approval_status),
            location: entity
                .location
                .clone()
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| "\u{2014}".to_string()),
            gst_number: entity.gst_number.clone(),
            pan_number: entity.pan_number.clone(),
            joined: format_date(&entity.created_at),
            approved_by: entity.approved_by.as_ref().map(|a| a.name.clone()),
            rejection_reason: entity.rejection_reason.clone(),
            is_active: entity.is_active,
            selected,
        }
    }
}

/// Render model of the whole table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub kind: EntityKind,
    pub title: &'static str,
    pub location_label: &'static str,
    pub header: CheckboxState,
    /// Select-all does nothing when there are no rows.
    pub select_all_inert: bool,
    /// Bulk bar text, e.g. `"2 vendors"`.
    pub selected_label: String,
    pub approve_enabled: bool,
    pub reject_enabled: bool,
    /// Checkboxes are locked while a request is in flight.
    pub rows_locked: bool,
    pub rows: Vec<RowView>,
}

impl TableView {
    pub fn build(
        kind: EntityKind,
        entities: &[ReviewableEntity],
        state: &ReviewTableState,
    ) -> Self {
        let selection = state.selection();
        let selected = selection.ordered_ids(entities).len();
        let busy = state.is_busy();

        Self {
            kind,
            title: kind.title(),
            location_label: kind.location_label(),
            header: selection.header_checkbox(entities),
            select_all_inert: entities.is_empty() || busy,
            selected_label: kind.count_label(selected),
            approve_enabled: selected > 0 && !busy,
            reject_enabled: selected > 0 && !busy,
            rows_locked: busy,
            rows: entities
                .iter()
                .map(|entity| RowView::build(entity, selection.contains(&entity.id)))
                .collect(),
        }
    }
}
