//! Vendor registrations review page

use dioxus::prelude::*;
use moderation::EntityKind;

use super::ReviewPage;

#[component]
pub fn AdminVendors() -> Element {
    let kind = EntityKind::Vendor;

    rsx! {
        ReviewPage { key: "{kind}", kind }
    }
}
