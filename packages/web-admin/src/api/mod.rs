//! REST API access for the admin console

#[cfg(any(feature = "server", test))]
mod client;
mod gateway;
mod server_fns;

#[cfg(any(feature = "server", test))]
pub use client::*;
pub use gateway::*;
pub use server_fns::*;
