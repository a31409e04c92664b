//! Status badge and avatar components

use dioxus::prelude::*;
use moderation::{BadgeTone, StatusBadge as Badge};

fn tone_classes(tone: BadgeTone) -> &'static str {
    match tone {
        BadgeTone::Amber => "bg-amber-100 text-amber-800",
        BadgeTone::Green => "bg-green-100 text-green-800",
        BadgeTone::Red => "bg-red-100 text-red-800",
    }
}

/// Approval status pill
#[component]
pub fn StatusBadge(badge: Badge) -> Element {
    let classes = tone_classes(badge.tone);

    rsx! {
        span {
            class: "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {classes}",
            "{badge.label}"
        }
    }
}

/// Round avatar showing a name's initials
#[component]
pub fn Avatar(initials: String) -> Element {
    rsx! {
        div {
            class: "w-9 h-9 rounded-full bg-amber-100 text-amber-800 flex items-center justify-center text-sm font-semibold shrink-0",
            "{initials}"
        }
    }
}
