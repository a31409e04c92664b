//! Shared review page for one kind of registration

use dioxus::prelude::*;
use moderation::{EntityKind, ReviewableEntity, StatusFilter};

use crate::api::fetch_entities;
use crate::components::{LoadingSpinner, ReviewTable};
use crate::state::{use_review_table_provider, ReviewContext};

/// Lists registrations of `kind` with status tabs and the bulk review table.
///
/// Each page owns its own table state; switching between the vendor and
/// company pages starts from an empty selection.
#[component]
pub fn ReviewPage(kind: EntityKind) -> Element {
    let table = use_review_table_provider(kind);
    let mut entities = use_server_future(move || fetch_entities(kind))?;

    // Drop selected ids that the current list or tab no longer shows
    use_effect(move || {
        let filter = (table.filter)();
        if let Some(Ok(list)) = &*entities.read() {
            let visible = filter.apply(list);
            let mut state = table.state;
            state.write().sync_collection(&visible);
        }
    });

    let result = entities.read_unchecked().clone();

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "{kind.title()}" }
                button {
                    class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-200",
                    onclick: move |_| entities.restart(),
                    "Refresh"
                }
            }

            match result {
                Some(Ok(list)) => {
                    let visible = (table.filter)().apply(&list);
                    rsx! {
                        FilterTabs { entities: list.clone(), table }
                        ReviewTable {
                            entities: visible,
                            on_refresh: move |_| entities.restart(),
                        }
                    }
                }
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg flex items-center justify-between",
                        span { "Could not load {kind.plural()}: {e}" }
                        button {
                            class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200",
                            onclick: move |_| entities.restart(),
                            "Try again"
                        }
                    }
                },
                None => rsx! {
                    div { class: "py-12", LoadingSpinner { label: "Loading {kind.plural()}..." } }
                },
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FilterTabsProps {
    entities: Vec<ReviewableEntity>,
    table: ReviewContext,
}

#[component]
fn FilterTabs(props: FilterTabsProps) -> Element {
    let mut table = props.table;
    let active = (table.filter)();

    rsx! {
        div {
            class: "flex gap-2 mb-4",
            for filter in StatusFilter::variants().iter().copied() {
                {
                    let count = filter.apply(&props.entities).len();
                    rsx! {
                        button {
                            key: "{filter.label()}",
                            class: if filter == active {
                                "px-4 py-2 rounded-lg text-sm font-medium bg-amber-500 text-white"
                            } else {
                                "px-4 py-2 rounded-lg text-sm font-medium bg-white text-gray-700 border border-gray-200 hover:bg-gray-50"
                            },
                            onclick: move |_| table.set_filter(filter),
                            "{filter.label()} ({count})"
                        }
                    }
                }
            }
        }
    }
}
