//! Reusable UI components

mod admin_layout;
mod admin_nav;
mod bulk_action_bar;
mod loading;
mod reject_dialog;
mod request_banner;
mod review_table;
mod row_actions;
mod status_badge;

pub use admin_layout::*;
pub use admin_nav::*;
pub use bulk_action_bar::*;
pub use loading::*;
pub use reject_dialog::*;
pub use request_banner::*;
pub use review_table::*;
pub use row_actions::*;
pub use status_badge::*;
