//! Per-row action menu

use dioxus::prelude::*;

const ACTIONS: &[&str] = &["View details", "View documents", "Delete"];

/// Row menu. Single-row actions are not wired yet; moderation goes through
/// the bulk bar.
#[component]
pub fn RowActionMenu(name: String) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div {
            class: "relative inline-block text-left",
            button {
                class: "px-2 py-1 rounded text-gray-500 hover:bg-gray-100",
                "aria-label": "Actions for {name}",
                onclick: move |_| open.set(!open()),
                "\u{22EF}"
            }
            if open() {
                div {
                    class: "absolute right-0 z-10 mt-1 w-44 bg-white border border-gray-200 rounded-md shadow-lg py-1",
                    onmouseleave: move |_| open.set(false),
                    for label in ACTIONS.iter() {
                        button {
                            class: "block w-full text-left px-3 py-1.5 text-sm text-gray-400 cursor-not-allowed",
                            disabled: true,
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
