//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::AdminLayout;
use crate::pages::admin::{AdminCompanies, AdminDashboard, AdminVendors};
use crate::pages::NotFound;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/")]
            AdminDashboard {},

            #[route("/vendors")]
            AdminVendors {},

            #[route("/companies")]
            AdminCompanies {},
        #[end_layout]
    #[end_nest]

    #[redirect("/", || Route::AdminDashboard {})]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
