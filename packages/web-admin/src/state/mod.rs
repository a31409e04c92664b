//! Review page state shared through context

use dioxus::prelude::*;
use moderation::{EntityKind, ReviewTableState, StatusFilter};

/// State of one review page: the table's selection/dialog/request state and
/// the active status tab.
#[derive(Clone, Copy, PartialEq)]
pub struct ReviewContext {
    pub state: Signal<ReviewTableState>,
    pub filter: Signal<StatusFilter>,
}

impl ReviewContext {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            state: Signal::new(ReviewTableState::new(kind)),
            filter: Signal::new(StatusFilter::default()),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.state.peek().kind()
    }

    /// Switch status tab. Selected rows hidden by the new tab are dropped by
    /// the page's sync effect.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        if *self.filter.peek() != filter {
            tracing::debug!(filter = filter.label(), "Switching status filter");
            self.filter.set(filter);
        }
    }
}

/// Create the review table state for a page and provide it to children
pub fn use_review_table_provider(kind: EntityKind) -> ReviewContext {
    use_context_provider(|| ReviewContext::new(kind))
}

/// Hook to access the review table state
pub fn use_review_table() -> ReviewContext {
    use_context::<ReviewContext>()
}
