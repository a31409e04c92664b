//! Admin dashboard page

use dioxus::prelude::*;
use moderation::EntityKind;

use crate::api::fetch_review_stats;
use crate::routes::Route;
use crate::types::{ReviewStats, StatusCounts};

/// Admin dashboard with review queue overview
#[component]
pub fn AdminDashboard() -> Element {
    let stats = use_server_future(fetch_review_stats)?;

    let (stats, load_error) = match &*stats.read_unchecked() {
        Some(Ok(s)) => (*s, None),
        Some(Err(e)) => (ReviewStats::default(), Some(e.to_string())),
        None => (ReviewStats::default(), None),
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Dashboard" }

            if let Some(message) = load_error {
                div {
                    class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-6",
                    "Could not load review stats: {message}"
                }
            }

            for kind in EntityKind::variants().iter().copied() {
                KindStats { key: "{kind}", kind, counts: stats.for_kind(kind) }
            }

            // Quick Actions
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Quick Actions" }
                div {
                    class: "flex flex-wrap gap-3",
                    QuickActionLink {
                        to: Route::AdminVendors {},
                        label: "Review Vendors",
                        icon: "\u{1F3EA}"
                    }
                    QuickActionLink {
                        to: Route::AdminCompanies {},
                        label: "Review Companies",
                        icon: "\u{1F3E2}"
                    }
                }
            }
        }
    }
}

#[component]
fn KindStats(kind: EntityKind, counts: StatusCounts) -> Element {
    rsx! {
        h2 { class: "text-lg font-semibold text-gray-900 mb-3", "{kind.title()}" }
        div {
            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8",

            StatCard {
                title: "Total",
                value: counts.total,
                icon: "\u{1F4CB}",
                color: "blue"
            }
            StatCard {
                title: "Pending Review",
                value: counts.pending,
                icon: "\u{23F3}",
                color: "amber"
            }
            StatCard {
                title: "Approved",
                value: counts.approved,
                icon: "\u{2705}",
                color: "green"
            }
            StatCard {
                title: "Rejected",
                value: counts.rejected,
                icon: "\u{274C}",
                color: "red"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: usize,
    icon: &'static str,
    color: &'static str,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    let (bg_class, text_class) = match props.color {
        "blue" => ("bg-blue-50", "text-blue-700"),
        "amber" => ("bg-amber-50", "text-amber-700"),
        "green" => ("bg-green-50", "text-green-700"),
        "red" => ("bg-red-50", "text-red-700"),
        _ => ("bg-gray-50", "text-gray-700"),
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-sm text-gray-500", "{props.title}" }
                    p { class: "text-3xl font-bold text-gray-900 mt-1", "{props.value}" }
                }
                div {
                    class: "w-12 h-12 rounded-full {bg_class} {text_class} flex items-center justify-center text-2xl",
                    "{props.icon}"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct QuickActionLinkProps {
    to: Route,
    label: &'static str,
    icon: &'static str,
}

#[component]
fn QuickActionLink(props: QuickActionLinkProps) -> Element {
    rsx! {
        Link {
            to: props.to.clone(),
            class: "inline-flex items-center gap-2 px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
            span { "{props.icon}" }
            "{props.label}"
        }
    }
}
