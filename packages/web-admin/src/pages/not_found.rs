//! Fallback page for unknown URLs

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center bg-gray-100 gap-4",
            h1 { class: "text-3xl font-bold text-gray-900", "Page not found" }
            p { class: "text-gray-500", "Nothing lives at /{path}." }
            Link {
                to: Route::AdminDashboard {},
                class: "px-4 py-2 bg-amber-500 text-white rounded-lg hover:bg-amber-600",
                "Back to dashboard"
            }
        }
    }
}
