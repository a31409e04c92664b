//! Admin layout wrapper

use dioxus::prelude::*;

use super::AdminNav;
use crate::routes::Route;

/// Admin layout component that provides navigation around each page
#[component]
pub fn AdminLayout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-100",

            AdminNav {}

            main {
                class: "p-6 max-w-7xl mx-auto",
                Outlet::<Route> {}
            }
        }
    }
}
