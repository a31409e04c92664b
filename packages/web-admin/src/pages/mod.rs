//! Application pages

pub mod admin;
mod not_found;

pub use not_found::*;
