//! Loading indicators for review pages and the bulk action bar

use dioxus::prelude::*;

const BOUNCE_DELAYS: [&str; 3] = ["0s", "0.1s", "0.2s"];

/// Block spinner shown while a registration list loads
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center",
            role: "status",
            div {
                class: "flex space-x-2",
                for delay in BOUNCE_DELAYS {
                    div {
                        class: "w-3 h-3 bg-amber-400 rounded-full animate-bounce",
                        style: "animation-delay: {delay}",
                    }
                }
            }
            p { class: "mt-4 text-sm text-gray-500", "{label}" }
        }
    }
}

/// Inline indicator next to the selection count while a batch is in flight
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        span {
            class: "inline-flex space-x-1",
            "aria-label": "Submitting",
            for delay in BOUNCE_DELAYS {
                span {
                    class: "w-2 h-2 bg-gray-400 rounded-full animate-bounce",
                    style: "animation-delay: {delay}",
                }
            }
        }
    }
}
