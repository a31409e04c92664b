//! Review table state for vendor and company moderation.
//!
//! Platform admins review vendor and company registrations in a table, check
//! rows, and approve or reject them in bulk. This crate holds everything that
//! table needs except the rendering itself:
//!
//! - [`Selection`] tracks which rows are checked.
//! - [`RejectionCapture`] gates a reject behind a written reason.
//! - [`ModerationRequest`] / [`ModerationGateway`] turn the selection into
//!   exactly one batch call to the API.
//! - [`ReviewTableState`] owns all of the above and exposes named transitions.
//! - [`TableView`] derives what to render from entities and state.
//!
//! State is plain data (serializable, no interior mutability, no IO), so a UI
//! can keep it in a signal and tests can drive it directly.
//!
//! # Example
//!
//! ```ignore
//! use moderation::{EntityKind, ReviewTableState};
//!
//! let mut state = ReviewTableState::new(EntityKind::Vendor);
//! state.toggle_all(&vendors);
//!
//! let request = state.begin_approve(&vendors)?;
//! let outcome = request.execute(&gateway).await;
//! state.complete(request.ticket, outcome);
//! ```

mod dispatch;
mod entity;
mod error;
mod rejection;
mod selection;
mod state;
mod view;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(test)]
mod workflow_tests;

pub use dispatch::{ModerationAction, ModerationGateway, ModerationRequest, RequestStatus};
pub use entity::{
    Approver, ApprovalStatus, EntityId, EntityKind, Identified, InvariantViolation,
    ReviewableEntity,
};
pub use error::{DispatchBlocked, ModerationError, ModerationResult};
pub use rejection::RejectionCapture;
pub use selection::{CheckboxState, Selection};
pub use state::ReviewTableState;
pub use view::{
    format_date, initials, BadgeTone, RowView, StatusBadge, StatusFilter, TableView,
};

pub use async_trait::async_trait;
