//! Banner reporting the outcome of the last moderation request

use dioxus::prelude::*;
use moderation::RequestStatus;

use crate::state::use_review_table;

/// Success or failure notice above the review table.
#[component]
pub fn RequestBanner(on_retry: EventHandler<()>) -> Element {
    let mut table = use_review_table();
    let status = table.state.read().status().clone();
    let kind = table.kind();

    // Only re-run when a different request succeeds
    let succeeded = use_memo(move || match table.state.read().status() {
        RequestStatus::Succeeded { ticket, .. } => Some(*ticket),
        _ => None,
    });

    // Success notices clear themselves after a few seconds
    use_effect(move || {
        if let Some(ticket) = succeeded() {
            schedule_dismiss(table, ticket);
        }
    });

    match status {
        RequestStatus::Succeeded { action, count, .. } => {
            let what = kind.count_label(count);
            let verb = action.past_tense();
            rsx! {
                div {
                    class: "flex items-center justify-between bg-green-50 border border-green-200 text-green-800 px-4 py-3 rounded-lg mb-4",
                    span { "{what} {verb}." }
                    button {
                        class: "text-sm text-green-700 hover:underline",
                        onclick: move |_| table.state.write().dismiss_status(),
                        "Dismiss"
                    }
                }
            }
        }
        RequestStatus::Failed { request, error } => {
            let what = kind.count_label(request.ids.len());
            let verb = request.action.verb();
            let message = error.user_message();
            let retryable = error.is_retryable();
            rsx! {
                div {
                    class: "flex items-center justify-between bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-lg mb-4",
                    span { "Could not {verb} {what}: {message}" }
                    div {
                        class: "flex items-center gap-3",
                        if retryable {
                            button {
                                class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200",
                                onclick: move |_| on_retry.call(()),
                                "Retry"
                            }
                        }
                        button {
                            class: "text-sm text-red-700 hover:underline",
                            onclick: move |_| table.state.write().dismiss_status(),
                            "Dismiss"
                        }
                    }
                }
            }
        }
        RequestStatus::InFlight { .. } | RequestStatus::Idle => rsx! {},
    }
}

#[cfg(feature = "web")]
fn schedule_dismiss(mut table: crate::state::ReviewContext, ticket: u64) {
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(4_000).await;
        table.state.write().dismiss_success(ticket);
    });
}

#[cfg(not(feature = "web"))]
fn schedule_dismiss(_table: crate::state::ReviewContext, _ticket: u64) {}
