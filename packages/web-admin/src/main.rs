//! Marketplace Admin - Dioxus Fullstack Web Application
//!
//! Review console for vendor and company registrations. Pages render on the
//! server; moderation calls go through server functions to the REST API.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
#[cfg(any(feature = "server", test))]
mod config;
mod pages;
mod routes;
mod state;
mod types;

fn main() {
    #[cfg(feature = "server")]
    init_server();

    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}

#[cfg(feature = "server")]
fn init_server() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,web_admin=debug,moderation=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match config::init() {
        Ok(config) => tracing::info!(api_url = %config.api_url, "Configuration loaded"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    }
}
