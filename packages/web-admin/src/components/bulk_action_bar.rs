//! Bulk action bar above the review table

use dioxus::prelude::*;

use super::LoadingDots;

#[derive(Props, Clone, PartialEq)]
pub struct BulkActionBarProps {
    /// e.g. "2 vendors"
    pub selected_label: String,
    pub approve_enabled: bool,
    pub reject_enabled: bool,
    pub busy: bool,
    pub on_approve: EventHandler<()>,
    pub on_reject: EventHandler<()>,
}

#[component]
pub fn BulkActionBar(props: BulkActionBarProps) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between px-4 py-3 bg-gray-50 border-b border-gray-200",
            div {
                class: "flex items-center gap-2 text-sm text-gray-600",
                span { "{props.selected_label} selected" }
                if props.busy {
                    LoadingDots {}
                }
            }
            div {
                class: "flex items-center gap-2",
                button {
                    class: "px-3 py-1.5 bg-green-100 text-green-700 text-sm rounded hover:bg-green-200 disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: !props.approve_enabled,
                    onclick: move |_| props.on_approve.call(()),
                    "Approve Selected"
                }
                button {
                    class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200 disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: !props.reject_enabled,
                    onclick: move |_| props.on_reject.call(()),
                    "Reject Selected"
                }
            }
        }
    }
}
