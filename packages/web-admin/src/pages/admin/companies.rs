//! Company registrations review page

use dioxus::prelude::*;
use moderation::EntityKind;

use super::ReviewPage;

#[component]
pub fn AdminCompanies() -> Element {
    let kind = EntityKind::Company;

    rsx! {
        ReviewPage { key: "{kind}", kind }
    }
}
