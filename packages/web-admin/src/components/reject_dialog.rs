//! Rejection reason dialog

use dioxus::prelude::*;

use crate::state::use_review_table;

/// Modal asking for a rejection reason before the reject is sent.
///
/// Confirm stays disabled until the reason has non-blank text.
#[component]
pub fn RejectDialog(on_confirm: EventHandler<()>) -> Element {
    let mut table = use_review_table();
    let state = table.state.read();

    if !state.rejection().is_open() {
        return rsx! {};
    }

    let kind = state.kind();
    let count = state.selection().len();
    let draft = state.rejection().draft().to_string();
    let can_confirm = state.can_confirm_rejection();
    let busy = state.is_busy();
    let error = state.rejection_error().map(|e| e.user_message());
    drop(state);

    let selected_label = kind.count_label(count);

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/40",
            div {
                class: "bg-white rounded-lg shadow-xl w-full max-w-md p-6",
                role: "dialog",
                "aria-modal": "true",

                h2 { class: "text-lg font-semibold text-gray-900", "Reject {selected_label}" }
                p {
                    class: "text-sm text-gray-500 mt-1 mb-4",
                    "The reason is shared with the applicant."
                }

                textarea {
                    class: "w-full h-28 border border-gray-300 rounded-md p-2 text-sm focus:outline-none focus:ring-2 focus:ring-amber-400",
                    placeholder: "Reason for rejection",
                    value: "{draft}",
                    disabled: busy,
                    oninput: move |evt| table.state.write().update_rejection_draft(evt.value()),
                }

                if let Some(message) = error {
                    p { class: "text-sm text-red-600 mt-2", "{message}" }
                }

                div {
                    class: "flex justify-end gap-2 mt-4",
                    button {
                        class: "px-4 py-2 text-sm rounded-md text-gray-700 hover:bg-gray-100 disabled:opacity-50",
                        disabled: busy,
                        onclick: move |_| table.state.write().cancel_rejection(),
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 text-sm rounded-md bg-red-600 text-white hover:bg-red-700 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: !can_confirm,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "Rejecting..." } else { "Reject" }
                    }
                }
            }
        }
    }
}
