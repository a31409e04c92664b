//! Rejection reason dialog.

use serde::{Deserialize, Serialize};

/// Modal that collects a justification before a reject is dispatched.
///
/// Lives next to the selection but never touches it: opening or cancelling
/// the dialog leaves the checked rows as they were.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionCapture {
    open: bool,
    draft: String,
}

impl RejectionCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Close and discard whatever was typed.
    pub fn cancel(&mut self) {
        self.open = false;
        self.draft.clear();
    }

    /// Close after a successful submission.
    pub fn finish(&mut self) {
        self.cancel();
    }

    pub fn can_confirm(&self) -> bool {
        self.open && !self.draft.trim().is_empty()
    }

    /// The reason to submit, trimmed, if the dialog can be confirmed.
    pub fn reason(&self) -> Option<&str> {
        self.can_confirm().then(|| self.draft.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_empty() {
        let dialog = RejectionCapture::new();
        assert!(!dialog.is_open());
        assert_eq!(dialog.draft(), "");
        assert!(!dialog.can_confirm());
    }

    #[test]
    fn confirm_requires_non_blank_text() {
        let mut dialog = RejectionCapture::new();
        dialog.open();
        assert!(!dialog.can_confirm());

        for blank in ["", " ", "   ", "\t", "\n  \t"] {
            dialog.update_draft(blank);
            assert!(!dialog.can_confirm(), "{blank:?} should not be confirmable");
            assert_eq!(dialog.reason(), None);
        }

        dialog.update_draft("  duplicate listing ");
        assert!(dialog.can_confirm());
        assert_eq!(dialog.reason(), Some("duplicate listing"));
    }

    #[test]
    fn closed_dialog_cannot_confirm_even_with_text() {
        let mut dialog = RejectionCapture::new();
        dialog.update_draft("missing GST certificate");
        assert!(!dialog.can_confirm());
    }

    #[test]
    fn cancel_discards_draft() {
        let mut dialog = RejectionCapture::new();
        dialog.open();
        dialog.update_draft("incomplete KYC");
        dialog.cancel();

        assert!(!dialog.is_open());
        assert_eq!(dialog.draft(), "");
    }
}
