//! The review table's state object and its transitions.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dispatch::{ModerationAction, ModerationRequest, RequestStatus};
use crate::entity::{EntityId, EntityKind, Identified};
use crate::error::{DispatchBlocked, ModerationError, ModerationResult};
use crate::rejection::RejectionCapture;
use crate::selection::{CheckboxState, Selection};

/// Everything the review table remembers between renders.
///
/// Owned by the rendering component and changed only through the methods
/// below. The selection is held while a request is in flight and cleared
/// only once the collaborator reports success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewTableState {
    kind: EntityKind,
    selection: Selection,
    rejection: RejectionCapture,
    status: RequestStatus,
    next_ticket: u64,
}

impl ReviewTableState {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            selection: Selection::new(),
            rejection: RejectionCapture::new(),
            status: RequestStatus::Idle,
            next_ticket: 1,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn rejection(&self) -> &RejectionCapture {
        &self.rejection
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        self.status.is_in_flight()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select all rows or none. Ignored while a request is in flight.
    pub fn toggle_all<T: Identified>(&mut self, collection: &[T]) {
        if self.is_busy() {
            debug!("Ignoring select-all while a request is in flight");
            return;
        }
        self.selection.toggle_all(collection);
    }

    /// Flip one row. Ignored while a request is in flight.
    pub fn toggle_one(&mut self, id: &EntityId) {
        if self.is_busy() {
            debug!(%id, "Ignoring row toggle while a request is in flight");
            return;
        }
        self.selection.toggle_one(id);
    }

    pub fn is_all_selected<T: Identified>(&self, collection: &[T]) -> bool {
        self.selection.is_all_selected(collection)
    }

    pub fn is_partially_selected<T: Identified>(&self, collection: &[T]) -> bool {
        self.selection.is_partially_selected(collection)
    }

    pub fn header_checkbox<T: Identified>(&self, collection: &[T]) -> CheckboxState {
        self.selection.header_checkbox(collection)
    }

    /// Drop selected ids that are no longer displayed, e.g. after a refresh
    /// or a filter change. Held ids of an in-flight request are kept.
    pub fn sync_collection<T: Identified>(&mut self, collection: &[T]) {
        if self.is_busy() {
            return;
        }
        let dropped = self.selection.retain_visible(collection);
        if dropped > 0 {
            debug!(dropped, "Dropped selected rows that are no longer visible");
        }
    }

    // -------------------------------------------------------------------------
    // Rejection dialog
    // -------------------------------------------------------------------------

    /// Open the reason dialog for the current selection.
    pub fn open_rejection(&mut self) -> Result<(), DispatchBlocked> {
        if self.is_busy() {
            return Err(DispatchBlocked::RequestInFlight);
        }
        if self.selection.is_empty() {
            return Err(DispatchBlocked::NothingSelected);
        }
        self.rejection.open();
        Ok(())
    }

    pub fn update_rejection_draft(&mut self, text: impl Into<String>) {
        self.rejection.update_draft(text);
    }

    /// Close the dialog and discard the draft. Ignored while the reject is
    /// being submitted.
    pub fn cancel_rejection(&mut self) {
        if self.is_busy() {
            return;
        }
        self.rejection.cancel();
    }

    pub fn can_confirm_rejection(&self) -> bool {
        self.rejection.can_confirm() && !self.selection.is_empty() && !self.is_busy()
    }

    /// Error of the last reject, for display inside the dialog. A failed
    /// approve is reported by the banner only.
    pub fn rejection_error(&self) -> Option<&ModerationError> {
        match &self.status {
            RequestStatus::Failed { request, error } if request.action.is_reject() => Some(error),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Build an approve request for the selected rows of `collection`.
    pub fn begin_approve<T: Identified>(
        &mut self,
        collection: &[T],
    ) -> Result<ModerationRequest, DispatchBlocked> {
        self.begin(collection, ModerationAction::Approve)
    }

    /// Build a reject request from the selected rows and the dialog's reason.
    pub fn begin_reject<T: Identified>(
        &mut self,
        collection: &[T],
    ) -> Result<ModerationRequest, DispatchBlocked> {
        if !self.rejection.is_open() {
            return Err(DispatchBlocked::DialogClosed);
        }
        let reason = self
            .rejection
            .reason()
            .ok_or(DispatchBlocked::EmptyReason)?
            .to_string();
        self.begin(collection, ModerationAction::Reject { reason })
    }

    fn begin<T: Identified>(
        &mut self,
        collection: &[T],
        action: ModerationAction,
    ) -> Result<ModerationRequest, DispatchBlocked> {
        if self.is_busy() {
            warn!(action = action.verb(), "Moderation request already in flight");
            return Err(DispatchBlocked::RequestInFlight);
        }

        let ids = self.selection.ordered_ids(collection);
        if ids.is_empty() {
            return Err(DispatchBlocked::NothingSelected);
        }

        Ok(self.issue(action, ids))
    }

    fn issue(&mut self, action: ModerationAction, ids: Vec<EntityId>) -> ModerationRequest {
        let request = ModerationRequest {
            ticket: self.next_ticket,
            kind: self.kind,
            action,
            ids,
        };
        self.next_ticket += 1;
        self.status = RequestStatus::InFlight {
            request: request.clone(),
        };
        debug!(ticket = request.ticket, "Moderation request in flight");
        request
    }

    /// Record the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` if `ticket` is not the request currently in flight.
    pub fn complete(&mut self, ticket: u64, outcome: ModerationResult) -> bool {
        let request = match &self.status {
            RequestStatus::InFlight { request } if request.ticket == ticket => request.clone(),
            _ => {
                debug!(ticket, "Ignoring completion of a stale moderation request");
                return false;
            }
        };

        self.status = match outcome {
            Ok(()) => {
                self.selection.clear();
                if request.action.is_reject() {
                    self.rejection.finish();
                }
                RequestStatus::Succeeded {
                    ticket: request.ticket,
                    action: request.action,
                    count: request.ids.len(),
                }
            }
            Err(error) => RequestStatus::Failed { request, error },
        };
        true
    }

    /// Re-issue the failed action with a new ticket.
    ///
    /// The batch is rebuilt from the current selection of `collection`, so
    /// rows unchecked or hidden since the failure are not sent. A failed
    /// reject is retried with the dialog's current reason.
    pub fn retry<T: Identified>(
        &mut self,
        collection: &[T],
    ) -> Result<ModerationRequest, DispatchBlocked> {
        let was_reject = match &self.status {
            RequestStatus::Failed { request, .. } => request.action.is_reject(),
            RequestStatus::InFlight { .. } => return Err(DispatchBlocked::RequestInFlight),
            _ => return Err(DispatchBlocked::NothingToRetry),
        };

        if was_reject {
            self.begin_reject(collection)
        } else {
            self.begin_approve(collection)
        }
    }

    /// Clear the success banner of `ticket`. A later request's banner stays.
    pub fn dismiss_success(&mut self, ticket: u64) {
        if matches!(self.status, RequestStatus::Succeeded { ticket: shown, .. } if shown == ticket) {
            self.status = RequestStatus::Idle;
        }
    }

    /// Clear a finished request's banner.
    pub fn dismiss_status(&mut self) {
        if !self.is_busy() {
            self.status = RequestStatus::Idle;
        }
    }
}
